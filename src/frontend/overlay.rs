use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use super::dom::{self, FrameLoop};
use crate::blob::BlobState;
use crate::constants::{BLOB_IDLE_SIZE_PX, REVEAL_DIAMETER_VMAX, TRAIL_COUNT};
use crate::cursor::CursorRig;
use crate::reveal::{RevealProgress, ThemeReveal};
use crate::spring::Point;
use crate::trail::TrailSegment;

/// Latest processed pointer position, shared between the sampler and the
/// animation loop without going through a re-render.
#[derive(Clone, Default)]
pub struct PointerFeed(Rc<Cell<Option<Point>>>);

impl PartialEq for PointerFeed {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PointerFeed {
    pub fn set(&self, point: Point) {
        self.0.set(Some(point));
    }

    pub fn get(&self) -> Option<Point> {
        self.0.get()
    }
}

#[derive(Properties, PartialEq)]
pub struct CursorOverlayProps {
    pub blob: BlobState,
    pub pointer: PointerFeed,
    #[prop_or_default]
    pub reveal_origin: Option<Point>,
    pub reveal_color: AttrValue,
    pub on_reveal_complete: Callback<()>,
}

#[function_component(CursorOverlay)]
pub fn cursor_overlay(props: &CursorOverlayProps) -> Html {
    let trail_refs = use_memo((), |_| {
        (0..TRAIL_COUNT)
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let blob_ref = use_node_ref();
    let reveal_ref = use_node_ref();

    let blob_size = use_mut_ref(|| BLOB_IDLE_SIZE_PX);
    let reveal = use_mut_ref(|| None::<ThemeReveal>);
    let on_complete = use_mut_ref(|| props.on_reveal_complete.clone());
    *on_complete.borrow_mut() = props.on_reveal_complete.clone();

    {
        let blob_size = blob_size.clone();
        use_effect_with(props.blob.size.to_bits(), move |size| {
            *blob_size.borrow_mut() = f64::from_bits(*size);
            || ()
        });
    }

    {
        let reveal = reveal.clone();
        use_effect_with(props.reveal_origin, move |origin| {
            let mut current = reveal.borrow_mut();
            match origin {
                Some(origin) if current.is_none() => *current = Some(ThemeReveal::new(*origin)),
                Some(_) => {}
                None => *current = None,
            }
            || ()
        });
    }

    {
        let trail_refs = trail_refs.clone();
        let blob_ref = blob_ref.clone();
        let reveal_ref = reveal_ref.clone();
        let pointer = props.pointer.clone();
        use_effect_with((), move |_| {
            let mut rig = CursorRig::new();
            let mut last_timestamp: Option<f64> = None;

            let frame_loop = FrameLoop::start(move |timestamp| {
                let dt = last_timestamp
                    .map(|last| ((timestamp - last) / 1000.0).max(0.0))
                    .unwrap_or(0.0);
                last_timestamp = Some(timestamp);

                let moving = pointer
                    .get()
                    .is_some_and(|point| rig.step(point, *blob_size.borrow(), dt));
                if moving {
                    for (segment, node) in rig.trail().segments().iter().zip(trail_refs.iter()) {
                        dom::set_translate(node, segment.draw_origin());
                    }
                    dom::set_translate(&blob_ref, rig.blob_origin());
                }

                let progress = reveal.borrow_mut().as_mut().map(|active| active.advance(dt));
                match progress {
                    Some(RevealProgress::Running { diameter_vmax }) => {
                        dom::set_diameter_vmax(&reveal_ref, diameter_vmax);
                    }
                    Some(RevealProgress::Finished) => {
                        reveal.borrow_mut().take();
                        dom::set_diameter_vmax(&reveal_ref, REVEAL_DIAMETER_VMAX);
                        let complete = on_complete.borrow().clone();
                        complete.emit(());
                    }
                    None => {}
                }
            });

            move || drop(frame_loop)
        });
    }

    let blob = props.blob;
    let trail = trail_refs
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let segment = TrailSegment::new(index);
            let style = format!(
                "width: {size:.2}px; height: {size:.2}px; background-color: {color};",
                size = segment.size(),
                color = segment.color(),
            );
            html! { <div key={index} class="trail-dot" ref={node.clone()} style={style} /> }
        })
        .collect::<Html>();

    let reveal_circle = props.reveal_origin.map(|origin| {
        let style = format!(
            "left: {:.2}px; top: {:.2}px; background-color: {};",
            origin.x, origin.y, props.reveal_color
        );
        html! { <div class="theme-reveal" ref={reveal_ref.clone()} style={style} /> }
    });

    html! {
        <div class="cursor-layer" aria-hidden="true">
            { for reveal_circle }
            { trail }
            <div class="blob-anchor" ref={blob_ref}>
                <div class="cursor-blob" data-shape={blob.shape.as_str()} style={blob.style()}>
                    { for blob.glyph.map(|glyph| html! {
                        <span class="blob-glyph" title={glyph.label()}>{glyph.symbol()}</span>
                    }) }
                </div>
            </div>
        </div>
    }
}
