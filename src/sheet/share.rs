//! The one action with a pre-effect: fetch a shareable link, then hand it
//! to the platform chooser. Runs on its own task so the sheet can abort it
//! on dismissal or when a newer share supersedes it.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::model::MediaEntity;

use super::ports::{Notice, ShareSink, ShareUrlProvider};

pub(super) fn spawn_share(
    provider: Arc<dyn ShareUrlProvider>,
    sink: Arc<dyn ShareSink>,
    notices: UnboundedSender<Notice>,
    plugin_name: String,
    entity: MediaEntity,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match provider.share_url(&entity).await {
            Ok(url) => {
                let title = format!("{} - {}", plugin_name, entity.title());
                tracing::debug!(entity = entity.id(), url = %url, "Share link fetched");
                sink.present(&title, &url);
            }
            Err(e) => {
                // The menu keeps its Share entry, so the user can retry.
                tracing::warn!(entity = entity.id(), error = %e, "Share link fetch failed");
                let _ = notices.send(Notice {
                    message: format!("Could not share \"{}\": {e}", entity.title()),
                });
            }
        }
    })
}
