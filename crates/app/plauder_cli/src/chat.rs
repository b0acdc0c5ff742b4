//! `plauder chat` — stdin lines in, transcript out.

use plauder_core::transport::HttpTransport;
use plauder_core::widget::{ChatWidget, SubmitOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;

use crate::terminal::TerminalView;
use crate::{Error, Result};

pub async fn run(endpoint: &str) -> Result<()> {
    let endpoint = Url::parse(endpoint)?;
    if !matches!(endpoint.scheme(), "http" | "https") {
        return Err(Error::Custom(format!(
            "unsupported endpoint scheme: {}",
            endpoint.scheme()
        )));
    }
    log::debug!("chatting with {endpoint}");

    let widget = ChatWidget::new(TerminalView::stdout(), HttpTransport::new(endpoint));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    widget.view().prompt();
    while let Some(line) = lines.next_line().await? {
        // Ignored lines never reach `focus_input`, so re-prompt here.
        if widget.submit(&line).await == SubmitOutcome::Ignored {
            widget.view().prompt();
        }
    }
    widget.view().finish();

    Ok(())
}
