mod dom;
mod overlay;
mod typewriter;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;

use crate::content::Content;
use crate::media::PlaybackError;
use crate::pointer::{FrameSlot, PointerSample};
use crate::state::{PageEvent, PageState, Theme};
use overlay::{CursorOverlay, PointerFeed};
use typewriter::Typewriter;

const CONTACT_EMAIL: &str = "ajaonajib46@gmail.com";

impl Reducible for PageState {
    type Action = PageEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

struct RawPointer {
    x: f64,
    y: f64,
    target: Option<Element>,
}

/// Listens to window `mousemove` and processes at most one sample per frame,
/// always the most recent one.
#[hook]
fn use_pointer_sampler(theme: Theme, feed: PointerFeed, dispatcher: UseReducerDispatcher<PageState>) {
    use_effect_with(theme, move |theme| {
        let theme = *theme;
        let slot: Rc<RefCell<FrameSlot<RawPointer>>> = Rc::default();
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();

        let listener = {
            let slot = slot.clone();
            let frame = frame.clone();
            dom::window_listener("mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let raw = RawPointer {
                    x: f64::from(event.client_x()),
                    y: f64::from(event.client_y()),
                    target: event.target().and_then(|target| target.dyn_into::<Element>().ok()),
                };
                if !slot.borrow_mut().submit(raw) {
                    return;
                }

                let slot = slot.clone();
                let pending = frame.clone();
                let feed = feed.clone();
                let dispatcher = dispatcher.clone();
                let handle = request_animation_frame(move |_| {
                    pending.borrow_mut().take();
                    let Some(raw) = slot.borrow_mut().take() else {
                        return;
                    };
                    let hit = raw.target.as_ref().and_then(dom::text_hit);
                    let sample = PointerSample::classify(raw.x, raw.y, hit.as_ref(), theme);
                    feed.set(sample.position());
                    dispatcher.dispatch(PageEvent::PointerClassified(sample.target));
                });
                *frame.borrow_mut() = Some(handle);
            })
        };

        move || {
            drop(listener);
            frame.borrow_mut().take();
            slot.borrow_mut().cancel();
        }
    });
}

#[hook]
fn use_scroll_tracker(dispatcher: UseReducerDispatcher<PageState>) {
    use_effect_with((), move |_| {
        dispatcher.dispatch(PageEvent::Scrolled(dom::scroll_y()));
        let listener = dom::window_listener("scroll", move |_| {
            dispatcher.dispatch(PageEvent::Scrolled(dom::scroll_y()));
        });
        move || drop(listener)
    });
}

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer_eq(PageState::default);
    let content = use_memo((), |_| Content::embedded());
    let feed = use_state(PointerFeed::default);

    let toggle_ref = use_node_ref();
    let work_scroller_ref = use_node_ref();
    let work_item_refs = use_memo(content.clone(), |content| {
        content
            .work_items
            .iter()
            .map(|item| (item.id, NodeRef::default(), NodeRef::default()))
            .collect::<Vec<_>>()
    });
    let work_video_refs = use_memo(work_item_refs.clone(), |refs| {
        refs.iter()
            .map(|(id, _, video)| (*id, video.clone()))
            .collect::<Vec<_>>()
    });
    let service_video_refs = use_memo(content.clone(), |content| {
        (0..content.services.len())
            .map(|index| (index, NodeRef::default()))
            .collect::<Vec<_>>()
    });

    use_pointer_sampler(state.theme, (*feed).clone(), state.dispatcher());
    use_scroll_tracker(state.dispatcher());

    use_effect_with(state.theme, |theme| {
        dom::apply_theme(*theme);
        || ()
    });

    let on_toggle = {
        let dispatcher = state.dispatcher();
        let toggle_ref = toggle_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(origin) = dom::element_center(&toggle_ref) {
                dispatcher.dispatch(PageEvent::ThemeToggleRequested {
                    origin,
                    reduced_motion: dom::prefers_reduced_motion(),
                });
            }
        })
    };

    let on_reveal_complete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            log::debug!("theme reveal finished");
            dispatcher.dispatch(PageEvent::RevealCompleted);
        })
    };

    let on_menu_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PageEvent::MenuToggled))
    };

    let on_work_rejected = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(PageEvent::WorkPlaybackRejected(id)))
    };

    let on_service_rejected = {
        let dispatcher = state.dispatcher();
        Callback::from(move |index: usize| {
            dispatcher.dispatch(PageEvent::ServicePlaybackRejected(index))
        })
    };

    let theme = state.theme;
    let accent_style = format!("color: {};", theme.accent());

    let work_items = content
        .work_items
        .iter()
        .zip(work_item_refs.iter())
        .map(|(item, (_, item_ref, video_ref))| {
            let id = item.id;
            let is_video = item.is_video();
            let is_playing = state.is_playing(id);
            let is_muted = state.is_muted(id);
            let is_hovered = state.hovered_work.map(|(hovered, _)| hovered) == Some(id);

            let onmouseenter = {
                let dispatcher = state.dispatcher();
                Callback::from(move |_: MouseEvent| {
                    dispatcher.dispatch(PageEvent::WorkHoverEntered { id, is_video })
                })
            };

            let onmouseleave = {
                let dispatcher = state.dispatcher();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(PageEvent::WorkHoverLeft))
            };

            let onclick = {
                let dispatcher = state.dispatcher();
                let video_refs = work_video_refs.clone();
                let on_rejected = on_work_rejected.clone();
                let service_refs = service_video_refs.clone();
                let on_service_rejected = on_service_rejected.clone();
                let scroller = work_scroller_ref.clone();
                let item_ref = item_ref.clone();
                let playing = state.playing_work;
                Callback::from(move |event: MouseEvent| {
                    event.stop_propagation();
                    if !is_video {
                        return;
                    }
                    if playing != Some(id) {
                        dom::video_group(&service_refs, &on_service_rejected).pause_all();
                    }
                    let group = dom::video_group(&video_refs, &on_rejected);
                    match group.toggle(id, playing) {
                        Ok(Some(started)) => {
                            dispatcher.dispatch(PageEvent::WorkPlaybackStarted(started));
                            dom::snap_to_left_edge(&scroller, &item_ref);
                        }
                        Ok(None) => dispatcher.dispatch(PageEvent::WorkPlaybackStopped(id)),
                        Err(PlaybackError::Missing) => {}
                        Err(err) => {
                            log::debug!("work item {id}: {err}");
                            dispatcher.dispatch(PageEvent::WorkPlaybackRejected(id));
                        }
                    }
                })
            };

            let on_mute = {
                let dispatcher = state.dispatcher();
                let video_refs = work_video_refs.clone();
                let on_rejected = on_work_rejected.clone();
                Callback::from(move |event: MouseEvent| {
                    event.stop_propagation();
                    dom::video_group(&video_refs, &on_rejected).set_muted(id, !is_muted);
                    dispatcher.dispatch(PageEvent::WorkMuteToggled(id));
                })
            };

            let onended = {
                let dispatcher = state.dispatcher();
                Callback::from(move |_: Event| dispatcher.dispatch(PageEvent::WorkPlaybackStopped(id)))
            };

            let media = if is_video {
                html! {
                    <video
                        ref={video_ref.clone()}
                        class={classes!("work-media", is_playing.then_some("is-playing"))}
                        src={item.media.clone()}
                        preload="metadata"
                        playsinline=true
                        muted={is_muted}
                        onended={onended}
                    />
                }
            } else {
                html! { <img class="work-media" src={item.media.clone()} alt={item.title.clone()} /> }
            };

            let mute_button = is_playing.then(|| {
                let label = if is_muted { "Unmute" } else { "Mute" };
                html! {
                    <button class="mute-toggle" type="button" aria-label={label} onclick={on_mute}>
                        <span aria-hidden="true">{ if is_muted { "🔇" } else { "🔊" } }</span>
                    </button>
                }
            });

            html! {
                <div
                    key={id}
                    ref={item_ref.clone()}
                    class={classes!("work-item", is_playing.then_some("is-playing"))}
                    onmouseenter={onmouseenter}
                    onmouseleave={onmouseleave}
                    onclick={onclick}
                >
                    { media }
                    { for mute_button }
                    <div class={classes!("work-caption", (is_hovered && !is_playing).then_some("is-visible"))}>
                        <div>
                            <div class="work-category">{ item.category.clone() }</div>
                            <h3 class="work-title">{ item.title.clone() }</h3>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let services = content
        .services
        .iter()
        .zip(service_video_refs.iter())
        .map(|(service, (index, video_ref))| {
            let index = *index;
            let is_active = state.hovered_service == Some(index);
            let is_playing = state.playing_service == Some(index);

            let onmouseenter = {
                let dispatcher = state.dispatcher();
                let video_refs = service_video_refs.clone();
                let on_rejected = on_service_rejected.clone();
                let work_refs = work_video_refs.clone();
                let on_work_rejected = on_work_rejected.clone();
                Callback::from(move |_: MouseEvent| {
                    dom::video_group(&work_refs, &on_work_rejected).pause_all();
                    dispatcher.dispatch(PageEvent::ServiceHoverEntered(index));
                    match dom::video_group(&video_refs, &on_rejected).play_exclusive(index) {
                        Ok(()) | Err(PlaybackError::Missing) => {}
                        Err(err) => {
                            log::debug!("service preview {index}: {err}");
                            dispatcher.dispatch(PageEvent::ServicePlaybackRejected(index));
                        }
                    }
                })
            };

            let onmouseleave = {
                let dispatcher = state.dispatcher();
                let video_refs = service_video_refs.clone();
                let on_rejected = on_service_rejected.clone();
                Callback::from(move |_: MouseEvent| {
                    dom::video_group(&video_refs, &on_rejected).pause(index);
                    dispatcher.dispatch(PageEvent::ServiceHoverLeft);
                })
            };

            html! {
                <article
                    key={index}
                    class={classes!(
                        "service-card",
                        is_active.then_some("is-active"),
                        is_playing.then_some("is-playing"),
                    )}
                    onmouseenter={onmouseenter}
                    onmouseleave={onmouseleave}
                >
                    <video
                        ref={video_ref.clone()}
                        class="service-media"
                        src={service.video.clone()}
                        preload="metadata"
                        playsinline=true
                        muted=true
                        loop=true
                    />
                    <div class="service-copy">
                        <h3>{ service.title.clone() }</h3>
                        <p class="muted">{ service.description.clone() }</p>
                    </div>
                </article>
            }
        })
        .collect::<Html>();

    let blog_posts = content
        .blog_posts
        .iter()
        .enumerate()
        .map(|(index, post)| {
            html! {
                <article key={index} class="blog-card">
                    <img src={post.image.clone()} alt={post.title.clone()} loading="lazy" />
                    <h3>{ post.title.clone() }</h3>
                    <a class="link" href="#blog">{ "Read more →" }</a>
                </article>
            }
        })
        .collect::<Html>();

    let nav_links = html! {
        <>
            <a href="#work">{ "Work" }</a>
            <a href="#services">{ "Services" }</a>
            <a href="#about">{ "About" }</a>
            <a class="pill-button" href={format!("mailto:{CONTACT_EMAIL}")}>{ "Contact" }</a>
        </>
    };

    html! {
        <>
            <a class="skip-link" href="#content">{ "Skip to main content" }</a>
            <CursorOverlay
                blob={state.blob()}
                pointer={(*feed).clone()}
                reveal_origin={state.reveal_origin}
                reveal_color={theme.toggled().background()}
                on_reveal_complete={on_reveal_complete}
            />
            <header class={classes!("site-header", state.scrolled.then_some("is-scrolled"))}>
                <div class="header-inner">
                    <div class="wordmark">{ "codenamej1b" }</div>
                    <nav class="site-nav" aria-label="Primary">{ nav_links.clone() }</nav>
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label={ if state.menu_open { "Close menu" } else { "Open menu" } }
                        aria-expanded={state.menu_open.to_string()}
                        onclick={on_menu_toggle}
                    >
                        <span aria-hidden="true">{ if state.menu_open { "✕" } else { "☰" } }</span>
                    </button>
                </div>
                if state.menu_open {
                    <nav class="mobile-nav" aria-label="Mobile">{ nav_links }</nav>
                }
            </header>

            <main id="content">
                <section class="hero" aria-labelledby="hero-heading">
                    <div class="hero-copy">
                        <h1 id="hero-heading">{ "Hi, I'm Najib" }</h1>
                        <h2 class="hero-tagline">
                            <span><Typewriter text="Your guy for all things " duration={2.0} /></span>
                            <span style={accent_style.clone()}>
                                <Typewriter class="accent-word" text="video!" duration={1.0} start_delay={2.0} />
                            </span>
                        </h2>
                    </div>
                    <button
                        ref={toggle_ref}
                        class="theme-toggle"
                        type="button"
                        aria-label={theme.toggle_label()}
                        aria-pressed={theme.pressed().to_string()}
                        style={format!("background-color: {};", theme.accent())}
                        onclick={on_toggle}
                    />
                </section>

                <section id="work" class="section-block" aria-labelledby="work-heading">
                    <div class="eyebrow-wrap">
                        <h2 id="work-heading" class="eyebrow">{ "FEATURED WORK" }</h2>
                        <div class="eyebrow-rule" style={format!("background-color: {};", theme.accent())} />
                    </div>
                    <div class="work-scroller" ref={work_scroller_ref}>
                        { work_items }
                    </div>
                </section>

                <section id="services" class="section-block" aria-labelledby="services-heading">
                    <h2 id="services-heading" class="eyebrow">{ "SERVICES" }</h2>
                    <div class="services-carousel">
                        { services }
                    </div>
                </section>

                <section id="about" class="section-block" aria-labelledby="about-heading">
                    <p class="eyebrow">{ "MY GOAL" }</p>
                    <h2 id="about-heading" class="statement">
                        { "To bring visions to life with" }
                        <br />
                        <span style={accent_style.clone()}>{ " agility and purpose. " }</span>
                    </h2>
                    <p class="lede">
                        { "I thrive on uncovering unexpected solutions, finding creative ways to transform ideas into impactful outcomes." }
                    </p>
                </section>

                <section id="blog" class="section-block" aria-labelledby="blog-heading">
                    <h2 id="blog-heading" class="eyebrow">{ "FROM THE BLOG" }</h2>
                    <div class="blog-grid">
                        { blog_posts }
                    </div>
                </section>

                <section class="section-block cta" aria-labelledby="cta-heading">
                    <h2 id="cta-heading">{ "Let's work together!" }</h2>
                    <a class="cta-email" href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a>
                    <div>
                        <a class="pill-button" href={format!("mailto:{CONTACT_EMAIL}")}>{ "Start a Project" }</a>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="footer-brand" style={accent_style}>{ "NAJIB AJAO" }</div>
                <p class="muted">{ "Creating visual stories that matter." }</p>
                <p class="muted">{ "© 2026 codenamej1b All rights reserved." }</p>
            </footer>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("showreel starting");

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
