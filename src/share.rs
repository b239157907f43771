// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! "Which band was it?" share intents.
//!
//! Episodes whose band could not be resolved get a call-to-action: a
//! pre-filled compose link asking the podcast which band was on. The link is
//! built here and handed to the system clipboard; nothing is sent from the
//! application itself.

use arboard::Clipboard;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::{config::ShareConfig, model::Episode};

#[derive(Debug, Error)]
pub(crate) enum ShareError {
    #[error("episode {0} already has a known band")]
    BandKnown(String),

    #[error("invalid share intent url")]
    InvalidUrl(#[from] url::ParseError),
}

/// Builds the compose intent URL for an episode without a known band.
pub(crate) fn compose_intent(config: &ShareConfig, episode: &Episode) -> Result<Url, ShareError> {
    if episode.band.is_known() {
        return Err(ShareError::BandKnown(episode.id.clone()));
    }

    let text = compose_message(config, episode);
    let url = Url::parse_with_params(&config.intent_url, &[("text", text)])?;

    debug!(episode = %episode.id, %url, "composed share intent");
    Ok(url)
}

fn compose_message(config: &ShareConfig, episode: &Episode) -> String {
    let mut message = String::new();

    if let Some(handle) = config.handle.as_deref().filter(|h| !h.is_empty()) {
        if !handle.starts_with('@') {
            message.push('@');
        }
        message.push_str(handle);
        message.push(' ');
    }

    message.push_str(&format!("which band was on \"{}\"?", episode.title));

    if let Some(tag) = config.hashtag.as_deref().filter(|t| !t.is_empty()) {
        message.push_str(" #");
        message.push_str(tag.trim_start_matches('#'));
    }

    message
}

/// Opens the session clipboard.
///
/// The handle must live as long as the application: on X11 and Wayland
/// without a clipboard manager the copied text disappears with it. Headless
/// sessions have no clipboard and get `None`.
pub(crate) fn open_clipboard() -> Option<Clipboard> {
    Clipboard::new()
        .map_err(|err| warn!(error = %err, "clipboard unavailable"))
        .ok()
}

/// Copies a share link to the session clipboard.
///
/// Returns whether the copy succeeded; without a clipboard the caller still
/// shows the link.
pub(crate) fn copy_to_clipboard(clipboard: Option<&mut Clipboard>, url: &Url) -> bool {
    let Some(clipboard) = clipboard else {
        return false;
    };

    match clipboard.set_text(url.as_str()) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "failed to copy share link");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::fixtures::episode;

    fn decoded_text(url: &Url) -> String {
        url.query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default()
    }

    #[test]
    fn composes_intent_for_unknown_band() {
        let config = ShareConfig {
            handle: Some("bandpod".into()),
            hashtag: Some("#whichband".into()),
            ..ShareConfig::default()
        };

        let url = compose_intent(&config, &episode("2", "<unknown>", "2023-02-01")).unwrap();

        assert_eq!(url.host_str(), Some("twitter.com"));
        assert_eq!(url.path(), "/intent/tweet");
        assert_eq!(decoded_text(&url), "@bandpod which band was on \"Episode 2\"? #whichband");
    }

    #[test]
    fn message_without_handle_or_hashtag() {
        let url = compose_intent(&ShareConfig::default(), &episode("9", "", "2023-02-01")).unwrap();

        assert_eq!(decoded_text(&url), "which band was on \"Episode 9\"?");
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn refuses_known_bands() {
        let result = compose_intent(&ShareConfig::default(), &episode("1", "Wilco", "2023-01-01"));

        assert!(matches!(result, Err(ShareError::BandKnown(id)) if id == "1"));
    }

    #[test]
    fn copy_without_clipboard_reports_failure() {
        let url = compose_intent(&ShareConfig::default(), &episode("2", "<band>", "2023-02-01")).unwrap();

        assert!(!copy_to_clipboard(None, &url));
    }

    #[test]
    fn reports_bad_intent_url() {
        let config = ShareConfig {
            intent_url: "not a url".into(),
            ..ShareConfig::default()
        };

        let result = compose_intent(&config, &episode("2", "<band>", "2023-02-01"));

        assert!(matches!(result, Err(ShareError::InvalidUrl(_))));
    }
}
