use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("no media element registered")]
    Missing,
}

pub trait MediaHandle {
    fn play(&self) -> Result<(), PlaybackError>;
    fn pause(&self);
    fn set_muted(&self, muted: bool);
}

pub struct MediaGroup<K, H> {
    handles: BTreeMap<K, H>,
}

impl<K: Ord + Copy, H: MediaHandle> FromIterator<(K, H)> for MediaGroup<K, H> {
    fn from_iter<I: IntoIterator<Item = (K, H)>>(iter: I) -> Self {
        Self {
            handles: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord + Copy, H: MediaHandle> MediaGroup<K, H> {
    /// Pauses every sibling of `key`, then starts `key`.
    pub fn play_exclusive(&self, key: K) -> Result<(), PlaybackError> {
        let target = self.handles.get(&key).ok_or(PlaybackError::Missing)?;
        for (_, sibling) in self.handles.iter().filter(|(other, _)| **other != key) {
            sibling.pause();
        }
        target.play()
    }

    pub fn pause(&self, key: K) {
        if let Some(handle) = self.handles.get(&key) {
            handle.pause();
        }
    }

    pub fn pause_all(&self) {
        for handle in self.handles.values() {
            handle.pause();
        }
    }

    pub fn set_muted(&self, key: K, muted: bool) {
        if let Some(handle) = self.handles.get(&key) {
            handle.set_muted(muted);
        }
    }

    /// Click behaviour of a showcase item: pause it if it is the one playing,
    /// otherwise play it exclusively. Returns the item that plays afterwards.
    pub fn toggle(&self, key: K, playing: Option<K>) -> Result<Option<K>, PlaybackError> {
        if !self.handles.contains_key(&key) {
            return Err(PlaybackError::Missing);
        }
        if playing == Some(key) {
            self.pause(key);
            return Ok(None);
        }
        self.play_exclusive(key)?;
        Ok(Some(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeVideo {
        playing: Cell<bool>,
        muted: Cell<bool>,
        reject: bool,
        log: Rc<RefCell<Vec<String>>>,
        name: &'static str,
    }

    impl FakeVideo {
        fn named(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                name,
                log: Rc::clone(log),
                ..Self::default()
            }
        }
    }

    impl MediaHandle for FakeVideo {
        fn play(&self) -> Result<(), PlaybackError> {
            self.log.borrow_mut().push(format!("play {}", self.name));
            if self.reject {
                return Err(PlaybackError::Rejected("autoplay blocked".to_string()));
            }
            self.playing.set(true);
            Ok(())
        }

        fn pause(&self) {
            self.log.borrow_mut().push(format!("pause {}", self.name));
            self.playing.set(false);
        }

        fn set_muted(&self, muted: bool) {
            self.muted.set(muted);
        }
    }

    fn group(log: &Rc<RefCell<Vec<String>>>) -> MediaGroup<u32, FakeVideo> {
        [(1, FakeVideo::named("a", log)), (2, FakeVideo::named("b", log))]
            .into_iter()
            .collect()
    }

    fn playing_count(group: &MediaGroup<u32, FakeVideo>) -> usize {
        group.handles.values().filter(|video| video.playing.get()).count()
    }

    #[test]
    fn starting_b_pauses_a_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let group = group(&log);

        assert_eq!(group.toggle(1, None), Ok(Some(1)));
        assert_eq!(group.toggle(2, Some(1)), Ok(Some(2)));

        assert_eq!(playing_count(&group), 1);
        assert!(group.handles[&2].playing.get());
        assert_eq!(log.borrow().as_slice(), ["pause b", "play a", "pause a", "play b"]);
    }

    #[test]
    fn toggling_the_playing_item_pauses_it() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let group = group(&log);

        group.toggle(1, None).expect("plays");
        assert_eq!(group.toggle(1, Some(1)), Ok(None));
        assert_eq!(playing_count(&group), 0);
    }

    #[test]
    fn missing_item_is_a_no_op() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let group = group(&log);

        assert_eq!(group.toggle(7, None), Err(PlaybackError::Missing));
        group.pause(7);
        group.set_muted(7, true);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn rejected_playback_leaves_nothing_playing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let blocked = FakeVideo {
            reject: true,
            ..FakeVideo::named("c", &log)
        };
        let group: MediaGroup<u32, FakeVideo> = [(1, FakeVideo::named("a", &log)), (3, blocked)]
            .into_iter()
            .collect();

        group.play_exclusive(1).expect("plays");
        let result = group.play_exclusive(3);

        assert!(matches!(result, Err(PlaybackError::Rejected(_))));
        assert_eq!(playing_count(&group), 0);
    }

    #[test]
    fn mute_reaches_only_its_item() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let group = group(&log);

        group.set_muted(2, true);
        assert!(!group.handles[&1].muted.get());
        assert!(group.handles[&2].muted.get());
    }

    #[test]
    fn pause_all_stops_every_item() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let group = group(&log);

        group.play_exclusive(2).expect("plays");
        group.pause_all();

        assert_eq!(playing_count(&group), 0);
        assert_eq!(log.borrow().as_slice(), ["pause a", "play b", "pause a", "pause b"]);
    }
}
