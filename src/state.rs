use std::collections::BTreeSet;

use crate::blob::{BlobState, HoveredWork};
use crate::color::theme_default_cursor;
use crate::constants::{ACCENT_DARK, ACCENT_LIGHT, HEADER_SCROLL_THRESHOLD_PX};
use crate::pointer::TargetKind;
use crate::spring::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn accent(self) -> &'static str {
        match self {
            Self::Light => ACCENT_LIGHT,
            Self::Dark => ACCENT_DARK,
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Light => ACCENT_DARK,
            Self::Dark => "#000000",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    PointerClassified(TargetKind),
    WorkHoverEntered { id: u32, is_video: bool },
    WorkHoverLeft,
    WorkPlaybackStarted(u32),
    WorkPlaybackStopped(u32),
    WorkPlaybackRejected(u32),
    WorkMuteToggled(u32),
    ServiceHoverEntered(usize),
    ServiceHoverLeft,
    ServicePlaybackRejected(usize),
    Scrolled(f64),
    MenuToggled,
    ThemeToggleRequested { origin: Point, reduced_motion: bool },
    RevealCompleted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub theme: Theme,
    pub scrolled: bool,
    pub menu_open: bool,
    pub pointer: TargetKind,
    pub hovered_work: Option<(u32, bool)>,
    pub playing_work: Option<u32>,
    pub muted_work: BTreeSet<u32>,
    pub hovered_service: Option<usize>,
    pub playing_service: Option<usize>,
    pub reveal_origin: Option<Point>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(Theme::Dark)
    }
}

impl PageState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            scrolled: false,
            menu_open: false,
            pointer: TargetKind::Plain {
                color: theme_default_cursor(theme),
            },
            hovered_work: None,
            playing_work: None,
            muted_work: BTreeSet::new(),
            hovered_service: None,
            playing_service: None,
            reveal_origin: None,
        }
    }

    pub fn apply(&self, event: PageEvent) -> Self {
        let mut next = self.clone();

        match event {
            PageEvent::PointerClassified(target) => next.pointer = target,
            PageEvent::WorkHoverEntered { id, is_video } => next.hovered_work = Some((id, is_video)),
            PageEvent::WorkHoverLeft => next.hovered_work = None,
            PageEvent::WorkPlaybackStarted(id) => {
                next.playing_work = Some(id);
                next.playing_service = None;
            }
            PageEvent::WorkPlaybackStopped(id) | PageEvent::WorkPlaybackRejected(id) => {
                if next.playing_work == Some(id) {
                    next.playing_work = None;
                }
            }
            PageEvent::WorkMuteToggled(id) => {
                if !next.muted_work.remove(&id) {
                    next.muted_work.insert(id);
                }
            }
            PageEvent::ServiceHoverEntered(index) => {
                next.hovered_service = Some(index);
                next.playing_service = Some(index);
                next.playing_work = None;
            }
            PageEvent::ServiceHoverLeft => {
                next.hovered_service = None;
                next.playing_service = None;
            }
            PageEvent::ServicePlaybackRejected(index) => {
                if next.playing_service == Some(index) {
                    next.playing_service = None;
                }
            }
            PageEvent::Scrolled(y) => next.scrolled = y > HEADER_SCROLL_THRESHOLD_PX,
            PageEvent::MenuToggled => next.menu_open = !next.menu_open,
            PageEvent::ThemeToggleRequested {
                origin,
                reduced_motion,
            } => {
                // A reveal already in flight wins; repeated clicks are dropped.
                if next.reveal_origin.is_some() {
                    return next;
                }
                if reduced_motion {
                    next.flip_theme();
                } else {
                    next.reveal_origin = Some(origin);
                }
            }
            PageEvent::RevealCompleted => {
                if next.reveal_origin.take().is_some() {
                    next.flip_theme();
                }
            }
        }

        next
    }

    fn flip_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let TargetKind::Plain { .. } = self.pointer {
            self.pointer = TargetKind::Plain {
                color: theme_default_cursor(self.theme),
            };
        }
    }

    pub fn is_muted(&self, id: u32) -> bool {
        self.muted_work.contains(&id)
    }

    pub fn is_playing(&self, id: u32) -> bool {
        self.playing_work == Some(id)
    }

    pub fn blob(&self) -> BlobState {
        let hovered = self.hovered_work.map(|(id, is_video)| HoveredWork {
            id,
            is_video,
            is_playing: self.is_playing(id),
        });
        BlobState::derive(&self.pointer, hovered, self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_toggle(state: &PageState, reduced_motion: bool) -> PageState {
        state.apply(PageEvent::ThemeToggleRequested {
            origin: Point::new(40.0, 300.0),
            reduced_motion,
        })
    }

    #[test]
    fn theme_flips_only_on_reveal_completion() {
        let start = PageState::default();
        assert_eq!(start.theme, Theme::Dark);

        let revealing = request_toggle(&start, false);
        assert_eq!(revealing.theme, Theme::Dark);
        assert_eq!(revealing.reveal_origin, Some(Point::new(40.0, 300.0)));

        let done = revealing.apply(PageEvent::RevealCompleted);
        assert_eq!(done.theme, Theme::Light);
        assert_eq!(done.reveal_origin, None);

        let stray = done.apply(PageEvent::RevealCompleted);
        assert_eq!(stray.theme, Theme::Light);
    }

    #[test]
    fn retrigger_during_reveal_is_ignored() {
        let revealing = request_toggle(&PageState::default(), false);
        let again = revealing.apply(PageEvent::ThemeToggleRequested {
            origin: Point::new(1.0, 1.0),
            reduced_motion: false,
        });

        assert_eq!(again, revealing);
        assert_eq!(again.apply(PageEvent::RevealCompleted).theme, Theme::Light);
    }

    #[test]
    fn reduced_motion_flips_immediately() {
        let state = request_toggle(&PageState::default(), true);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.reveal_origin, None);
        assert_eq!(state.pointer.cursor_color(), "#000000");
    }

    #[test]
    fn at_most_one_work_item_plays() {
        let state = PageState::default()
            .apply(PageEvent::WorkPlaybackStarted(1))
            .apply(PageEvent::WorkPlaybackStarted(2));

        assert!(!state.is_playing(1));
        assert!(state.is_playing(2));

        let stale_stop = state.apply(PageEvent::WorkPlaybackStopped(1));
        assert_eq!(stale_stop.playing_work, Some(2));

        let rejected = state.apply(PageEvent::WorkPlaybackRejected(2));
        assert_eq!(rejected.playing_work, None);
    }

    #[test]
    fn work_and_service_videos_never_play_together() {
        let service = PageState::default()
            .apply(PageEvent::WorkPlaybackStarted(1))
            .apply(PageEvent::ServiceHoverEntered(0));
        assert_eq!(service.playing_work, None);
        assert_eq!(service.playing_service, Some(0));

        let work = service.apply(PageEvent::WorkPlaybackStarted(3));
        assert_eq!(work.playing_work, Some(3));
        assert_eq!(work.playing_service, None);
        assert_eq!(work.hovered_service, Some(0));
    }

    #[test]
    fn mute_toggles_per_item() {
        let state = PageState::default()
            .apply(PageEvent::WorkMuteToggled(3))
            .apply(PageEvent::WorkMuteToggled(4))
            .apply(PageEvent::WorkMuteToggled(3));

        assert!(!state.is_muted(3));
        assert!(state.is_muted(4));
    }

    #[test]
    fn service_hover_drives_preview() {
        let hovered = PageState::default().apply(PageEvent::ServiceHoverEntered(2));
        assert_eq!(hovered.playing_service, Some(2));

        let rejected = hovered.apply(PageEvent::ServicePlaybackRejected(2));
        assert_eq!(rejected.hovered_service, Some(2));
        assert_eq!(rejected.playing_service, None);

        let left = hovered.apply(PageEvent::ServiceHoverLeft);
        assert_eq!(left.hovered_service, None);
        assert_eq!(left.playing_service, None);
    }

    #[test]
    fn header_compacts_past_threshold() {
        let state = PageState::default();
        assert!(!state.apply(PageEvent::Scrolled(50.0)).scrolled);
        assert!(state.apply(PageEvent::Scrolled(51.0)).scrolled);
    }

    #[test]
    fn menu_toggle_round_trips() {
        let open = PageState::default().apply(PageEvent::MenuToggled);
        assert!(open.menu_open);
        assert!(!open.apply(PageEvent::MenuToggled).menu_open);
    }

    #[test]
    fn theme_labels() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert!(Theme::Dark.pressed());
        assert_eq!(Theme::Light.accent(), "#303EF7");
        assert_eq!(Theme::Dark.toggled().background(), "#ff9500");
    }
}
