//! Text-field edit lifecycle: pre-edit snapshots and channel text parsing.

use std::collections::HashMap;

use crate::config::ParsePolicy;
use crate::error::ChannelTextError;
use crate::math::DISPLAY_MAX;
use crate::state::Channel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Idle,
    Editing,
}

/// Per-field text captured when editing began, used to roll back an empty
/// commit. Entries are overwritten by the next edit and never removed.
#[derive(Debug, Default)]
pub struct PendingEditCache {
    before: HashMap<Channel, String>,
    states: HashMap<Channel, FieldState>,
}

impl PendingEditCache {
    pub fn begin(&mut self, channel: Channel, text: Option<String>) {
        self.before.insert(channel, text.unwrap_or_default());
        self.states.insert(channel, FieldState::Editing);
    }

    /// Mark the field idle and return its snapshot, if one was ever taken.
    pub fn end(&mut self, channel: Channel) -> Option<&str> {
        self.states.insert(channel, FieldState::Idle);
        self.before.get(&channel).map(String::as_str)
    }

    pub fn state(&self, channel: Channel) -> FieldState {
        self.states.get(&channel).copied().unwrap_or_default()
    }
}

/// Parse channel text on the 0–255 display scale.
///
/// The text must be a bare number: surrounding whitespace makes it
/// unparseable. Finite values outside the range come back as
/// [`ChannelTextError::OutOfRange`]; NaN counts as unparseable.
pub fn parse_channel_text(text: &str) -> Result<f64, ChannelTextError> {
    if text.is_empty() {
        return Err(ChannelTextError::Empty);
    }
    let value: f64 = text
        .parse()
        .map_err(|_| ChannelTextError::Unparseable(text.to_string()))?;
    if value.is_nan() {
        return Err(ChannelTextError::Unparseable(text.to_string()));
    }
    if !(0.0..=DISPLAY_MAX).contains(&value) {
        return Err(ChannelTextError::OutOfRange(value));
    }
    Ok(value)
}

/// What committing a field should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Commit {
    /// Store this display-scale value (already within 0–255).
    Value(f64),
    /// Restore the pre-edit text and leave the color alone.
    Revert,
}

/// Map field text to a commit under `policy`. Empty text always reverts.
pub fn resolve_channel_text(text: &str, policy: ParsePolicy) -> (Commit, Option<ChannelTextError>) {
    match parse_channel_text(text) {
        Ok(v) => (Commit::Value(v), None),
        Err(err) => {
            let commit = match (&err, policy) {
                (ChannelTextError::Empty, _) => Commit::Revert,
                (ChannelTextError::Unparseable(_), ParsePolicy::FailOpen) => {
                    Commit::Value(DISPLAY_MAX)
                }
                (ChannelTextError::Unparseable(_), ParsePolicy::Revert) => Commit::Revert,
                (ChannelTextError::OutOfRange(v), _) => Commit::Value(v.clamp(0.0, DISPLAY_MAX)),
            };
            (commit, Some(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_fractional_numbers() {
        assert_eq!(parse_channel_text("128"), Ok(128.0));
        assert_eq!(parse_channel_text("7.5"), Ok(7.5));
        assert_eq!(parse_channel_text("0"), Ok(0.0));
    }

    #[test]
    fn classifies_failures() {
        assert_eq!(parse_channel_text(""), Err(ChannelTextError::Empty));
        assert_eq!(
            parse_channel_text("abc"),
            Err(ChannelTextError::Unparseable("abc".into()))
        );
        assert_eq!(parse_channel_text("999"), Err(ChannelTextError::OutOfRange(999.0)));
        assert_eq!(parse_channel_text("-50"), Err(ChannelTextError::OutOfRange(-50.0)));
        assert_eq!(
            parse_channel_text(" 7"),
            Err(ChannelTextError::Unparseable(" 7".into()))
        );
        assert!(matches!(parse_channel_text("7 "), Err(ChannelTextError::Unparseable(_))));
        assert!(matches!(parse_channel_text("NaN"), Err(ChannelTextError::Unparseable(_))));
        assert!(matches!(parse_channel_text("inf"), Err(ChannelTextError::OutOfRange(_))));
    }

    #[test]
    fn fail_open_substitutes_max() {
        let (commit, err) = resolve_channel_text("abc", ParsePolicy::FailOpen);
        assert_eq!(commit, Commit::Value(255.0));
        assert!(err.is_some());
        assert_eq!(resolve_channel_text("   ", ParsePolicy::FailOpen).0, Commit::Value(255.0));
    }

    #[test]
    fn revert_policy_rejects_garbage() {
        assert_eq!(resolve_channel_text("abc", ParsePolicy::Revert).0, Commit::Revert);
        assert_eq!(resolve_channel_text("12", ParsePolicy::Revert).0, Commit::Value(12.0));
    }

    #[test]
    fn out_of_range_clamps_under_any_policy() {
        for policy in [ParsePolicy::FailOpen, ParsePolicy::Revert] {
            assert_eq!(resolve_channel_text("999", policy).0, Commit::Value(255.0));
            assert_eq!(resolve_channel_text("-50", policy).0, Commit::Value(0.0));
            assert_eq!(resolve_channel_text("-inf", policy).0, Commit::Value(0.0));
        }
    }

    #[test]
    fn empty_always_reverts() {
        assert_eq!(resolve_channel_text("", ParsePolicy::FailOpen).0, Commit::Revert);
    }

    #[test]
    fn cache_tracks_lifecycle() {
        let mut cache = PendingEditCache::default();
        assert_eq!(cache.state(Channel::Red), FieldState::Idle);
        assert_eq!(cache.end(Channel::Red), None);

        cache.begin(Channel::Red, Some("128".into()));
        assert_eq!(cache.state(Channel::Red), FieldState::Editing);
        assert_eq!(cache.state(Channel::Green), FieldState::Idle);
        assert_eq!(cache.end(Channel::Red), Some("128"));
        assert_eq!(cache.state(Channel::Red), FieldState::Idle);

        // stale entry survives until the next edit overwrites it
        assert_eq!(cache.end(Channel::Red), Some("128"));
        cache.begin(Channel::Red, None);
        assert_eq!(cache.end(Channel::Red), Some(""));
    }
}
