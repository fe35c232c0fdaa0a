use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    window, Element, Event, HtmlElement, HtmlVideoElement, ScrollBehavior, ScrollToOptions,
};
use yew::{Callback, NodeRef};

use crate::media::{MediaGroup, MediaHandle, PlaybackError};
use crate::pointer::{text_bearing_selector, TextHit};
use crate::spring::Point;
use crate::state::Theme;

pub fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn element_center(node: &NodeRef) -> Option<Point> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(Point::new(
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    ))
}

pub fn text_hit(target: &Element) -> Option<TextHit> {
    let element = target.closest(&text_bearing_selector()).ok().flatten()?;
    let color = window()?
        .get_computed_style(&element)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("color").ok())
        .unwrap_or_default();
    let rect = element.get_bounding_client_rect();

    Some(TextHit {
        color,
        left: rect.left(),
        width: rect.width(),
    })
}

pub fn set_translate(node: &NodeRef, origin: Point) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.style().set_property(
            "transform",
            &format!("translate3d({:.2}px, {:.2}px, 0)", origin.x, origin.y),
        );
    }
}

pub fn set_diameter_vmax(node: &NodeRef, diameter: f64) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let value = format!("{diameter:.3}vmax");
        let style = element.style();
        let _ = style.set_property("width", &value);
        let _ = style.set_property("height", &value);
    }
}

// Deferred until layout has the item's new width.
pub fn snap_to_left_edge(container: &NodeRef, item: &NodeRef) {
    let container = container.clone();
    let item = item.clone();
    let _ = Timeout::new(0, move || {
        let (Some(container), Some(item)) = (container.cast::<Element>(), item.cast::<HtmlElement>())
        else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_left(f64::from(item.offset_left()));
        options.set_behavior(ScrollBehavior::Smooth);
        container.scroll_to_with_scroll_to_options(&options);
    })
    .forget();
}

pub struct FrameLoop {
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    pub fn start(on_frame: impl FnMut(f64) + 'static) -> Self {
        let frame = Rc::default();
        schedule(Rc::clone(&frame), Rc::new(RefCell::new(on_frame)));
        Self { frame }
    }
}

fn schedule<F>(frame: Rc<RefCell<Option<AnimationFrame>>>, on_frame: Rc<RefCell<F>>)
where
    F: FnMut(f64) + 'static,
{
    let next = Rc::clone(&frame);
    let handle = request_animation_frame(move |timestamp| {
        next.borrow_mut().take();
        {
            let mut on_frame = on_frame.borrow_mut();
            (*on_frame)(timestamp);
        }
        schedule(next, on_frame);
    });
    *frame.borrow_mut() = Some(handle);
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.frame.borrow_mut().take();
    }
}

pub fn window_listener(
    event: &'static str,
    handler: impl FnMut(&Event) + 'static,
) -> Option<EventListener> {
    window().map(|w| EventListener::new(&w, event, handler))
}

pub struct VideoHandle {
    element: HtmlVideoElement,
    on_rejected: Callback<()>,
}

impl MediaHandle for VideoHandle {
    fn play(&self) -> Result<(), PlaybackError> {
        let promise = self
            .element
            .play()
            .map_err(|err| PlaybackError::Rejected(format!("{err:?}")))?;
        let on_rejected = self.on_rejected.clone();
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("playback interrupted: {err:?}");
                on_rejected.emit(());
            }
        });
        Ok(())
    }

    fn pause(&self) {
        let _ = self.element.pause();
    }

    fn set_muted(&self, muted: bool) {
        self.element.set_muted(muted);
    }
}

// Unmounted entries are skipped.
pub fn video_group<K>(refs: &[(K, NodeRef)], on_rejected: &Callback<K>) -> MediaGroup<K, VideoHandle>
where
    K: Ord + Copy + 'static,
{
    refs.iter()
        .filter_map(|(key, node)| {
            let element = node.cast::<HtmlVideoElement>()?;
            let key = *key;
            Some((
                key,
                VideoHandle {
                    element,
                    on_rejected: on_rejected.reform(move |_| key),
                },
            ))
        })
        .collect()
}
