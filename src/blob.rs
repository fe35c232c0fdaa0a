use crate::constants::{
    BLOB_HOVER_SIZE_PX, BLOB_IDLE_SIZE_PX, BLOB_MIN_SCALE_Y, BLOB_SQUASH_Y, BLOB_STRETCH_X,
};
use crate::pointer::TargetKind;
use crate::state::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlobShape {
    Default,
    Text,
}

impl BlobShape {
    pub fn border_radius(self) -> &'static str {
        match self {
            Self::Default => "50%",
            Self::Text => "60% 40% 55% 45% / 40% 60% 45% 55%",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Text => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Play,
    Pause,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "❚❚",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverKind {
    None,
    Text,
    WorkItem(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoveredWork {
    pub id: u32,
    pub is_video: bool,
    pub is_playing: bool,
}

/// Stretch along x and squash along y for a normalised pointer offset.
pub fn deformation(offset: f64) -> (f64, f64) {
    let ax = offset.abs().min(0.5);
    (
        1.0 + ax * BLOB_STRETCH_X,
        (1.0 - ax * BLOB_SQUASH_Y).max(BLOB_MIN_SCALE_Y),
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobState {
    pub size: f64,
    pub color: &'static str,
    pub scale_x: f64,
    pub scale_y: f64,
    pub shape: BlobShape,
    pub hover: HoverKind,
    pub glyph: Option<Glyph>,
}

impl BlobState {
    pub fn derive(pointer: &TargetKind, work: Option<HoveredWork>, theme: Theme) -> Self {
        let (scale_x, scale_y) = match pointer {
            TargetKind::Text { offset, .. } => deformation(*offset),
            TargetKind::Plain { .. } => (1.0, 1.0),
        };

        let hover = match (work, pointer.is_text()) {
            (Some(work), _) => HoverKind::WorkItem(work.id),
            (None, true) => HoverKind::Text,
            (None, false) => HoverKind::None,
        };

        let (size, shape) = match hover {
            HoverKind::None => (BLOB_IDLE_SIZE_PX, BlobShape::Default),
            HoverKind::Text | HoverKind::WorkItem(_) => (BLOB_HOVER_SIZE_PX, BlobShape::Text),
        };

        let color = match hover {
            HoverKind::WorkItem(_) => theme.accent(),
            HoverKind::None | HoverKind::Text => pointer.cursor_color(),
        };

        let glyph = work.filter(|work| work.is_video).map(|work| {
            if work.is_playing {
                Glyph::Pause
            } else {
                Glyph::Play
            }
        });

        let (scale_x, scale_y) = match shape {
            BlobShape::Default => (1.0, 1.0),
            BlobShape::Text => (scale_x, scale_y),
        };

        Self {
            size,
            color,
            scale_x,
            scale_y,
            shape,
            hover,
            glyph,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; border-radius: {radius}; background-color: {color}; transform: scale({sx:.4}, {sy:.4});",
            size = self.size,
            radius = self.shape.border_radius(),
            color = self.color,
            sx = self.scale_x,
            sy = self.scale_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(offset: f64) -> TargetKind {
        TargetKind::Text {
            color: "#000000",
            offset,
        }
    }

    #[test]
    fn centre_has_no_deformation() {
        assert_eq!(deformation(0.0), (1.0, 1.0));
    }

    #[test]
    fn edges_hit_maximum_deformation() {
        for offset in [-0.5, 0.5] {
            let (sx, sy) = deformation(offset);
            assert!((sx - 1.175).abs() < 1e-12);
            assert!((sy - 0.875).abs() < 1e-12);
            assert!(sy >= 0.85);
        }
    }

    #[test]
    fn idle_blob_is_round() {
        let blob = BlobState::derive(&TargetKind::Plain { color: "#ffffff" }, None, Theme::Dark);
        assert_eq!(blob.size, 32.0);
        assert_eq!(blob.shape, BlobShape::Default);
        assert_eq!(blob.hover, HoverKind::None);
        assert_eq!((blob.scale_x, blob.scale_y), (1.0, 1.0));
        assert_eq!(blob.color, "#ffffff");
        assert_eq!(blob.glyph, None);
    }

    #[test]
    fn text_hover_grows_and_stretches() {
        let blob = BlobState::derive(&text(0.5), None, Theme::Dark);
        assert_eq!(blob.size, 120.0);
        assert_eq!(blob.shape, BlobShape::Text);
        assert_eq!(blob.hover, HoverKind::Text);
        assert!((blob.scale_x - 1.175).abs() < 1e-12);
        assert_eq!(blob.color, "#000000");
    }

    #[test]
    fn work_hover_forces_accent_and_glyph() {
        let idle = HoveredWork {
            id: 3,
            is_video: true,
            is_playing: false,
        };
        let blob = BlobState::derive(&TargetKind::Plain { color: "#ffffff" }, Some(idle), Theme::Light);
        assert_eq!(blob.hover, HoverKind::WorkItem(3));
        assert_eq!(blob.size, 120.0);
        assert_eq!(blob.color, "#303EF7");
        assert_eq!(blob.glyph, Some(Glyph::Play));

        let playing = HoveredWork {
            is_playing: true,
            ..idle
        };
        let blob = BlobState::derive(&text(0.1), Some(playing), Theme::Dark);
        assert_eq!(blob.color, "#ff9500");
        assert_eq!(blob.glyph, Some(Glyph::Pause));
    }

    #[test]
    fn still_images_show_no_glyph() {
        let still = HoveredWork {
            id: 9,
            is_video: false,
            is_playing: false,
        };
        let blob = BlobState::derive(&TargetKind::Plain { color: "#ffffff" }, Some(still), Theme::Dark);
        assert_eq!(blob.glyph, None);
        assert_eq!(blob.shape, BlobShape::Text);
    }
}
