use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{DragEvent, Event, MouseEvent};
use yew::prelude::*;

use crate::app_router::{self, Route};
use crate::backdrop::{backdrop_circles, confetti_burst, BackdropCircle, ConfettiPiece, BACKDROP_SEED};
use crate::boot_runtime::{self, BootState};
use crate::core::{
    apply_document_theme, media_query_list, media_query_matches, persist_theme_hint, ThemeMode,
    DARK_SCHEME_QUERY, REDUCED_MOTION_QUERY,
};
use crate::drag::DragTracker;
use crate::persisted_store;
use nijinarabe_core::{splitmix32, Color, GamePhase, GameState, COLOR_CATALOG, MAX_LEVEL, SPECTRUM};

fn time_nonce(previous: u32) -> u32 {
    let now = js_sys::Date::now() as u32;
    splitmix32(now ^ previous.wrapping_add(0x9E37_79B9))
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let ready = use_state(|| boot_runtime::boot_state() == BootState::Ready);
    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            let hook_ready = ready.clone();
            let id = boot_runtime::add_boot_state_hook(Rc::new(move || {
                hook_ready.set(boot_runtime::boot_state() == BootState::Ready);
            }));
            // storage may already have finished before the hook registered
            ready.set(boot_runtime::boot_state() == BootState::Ready);
            move || boot_runtime::remove_boot_state_hook(id)
        });
    }
    if !*ready {
        return html! { <main class="boot-pending" aria-busy="true"></main> };
    }
    html! { <Shell /> }
}

#[function_component(Shell)]
fn shell() -> Html {
    let route = use_state(app_router::current_route);
    let theme_mode = use_state(|| persisted_store::settings_blob().theme_mode);
    let animations = use_state(|| persisted_store::settings_blob().backdrop.animations);
    let reduced_motion = use_state(|| media_query_matches(REDUCED_MOTION_QUERY));

    // back/forward and manual hash edits
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listeners = web_sys::window().map(|window| {
                let route_pop = route.clone();
                let popstate = EventListener::new(&window, "popstate", move |_event: &Event| {
                    route_pop.set(app_router::current_route());
                });
                let route_hash = route.clone();
                let hashchange = EventListener::new(&window, "hashchange", move |_event: &Event| {
                    route_hash.set(app_router::current_route());
                });
                (popstate, hashchange)
            });
            move || drop(listeners)
        });
    }

    {
        use_effect_with(*theme_mode, move |mode| {
            let mode = *mode;
            persisted_store::update_settings_blob(move |settings| {
                settings.theme_mode = mode;
            });
            persist_theme_hint(mode);
            apply_document_theme(mode);
            // while following the system, track scheme flips
            let listener = (mode == ThemeMode::System)
                .then(|| media_query_list(DARK_SCHEME_QUERY))
                .flatten()
                .map(|list| {
                    EventListener::new(&list, "change", move |_event: &Event| {
                        apply_document_theme(ThemeMode::System);
                    })
                });
            move || drop(listener)
        });
    }

    {
        let reduced_motion = reduced_motion.clone();
        use_effect_with((), move |_| {
            let listener = media_query_list(REDUCED_MOTION_QUERY).map(|list| {
                let handle = reduced_motion.clone();
                EventListener::new(&list, "change", move |_event: &Event| {
                    handle.set(media_query_matches(REDUCED_MOTION_QUERY));
                })
            });
            move || drop(listener)
        });
    }

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            app_router::navigate(next);
            route.set(next);
        })
    };

    let on_theme_toggle = {
        let theme_mode = theme_mode.clone();
        Callback::from(move |_event: MouseEvent| {
            theme_mode.set((*theme_mode).cycled());
        })
    };

    let on_animations_toggle = {
        let animations = animations.clone();
        Callback::from(move |_event: MouseEvent| {
            let next = !*animations;
            persisted_store::update_settings_blob(move |settings| {
                settings.backdrop.animations = next;
            });
            animations.set(next);
        })
    };

    let motion_enabled = *animations && !*reduced_motion;

    html! {
        <>
            <Backdrop animate={motion_enabled} />
            <Header
                route={*route}
                theme_mode={*theme_mode}
                on_navigate={on_navigate.clone()}
                on_theme_toggle={on_theme_toggle}
            />
            <main class="page">
            {
                match *route {
                    Route::Home => html! { <HomePage on_navigate={on_navigate} /> },
                    Route::Play => html! { <PlayPage motion_enabled={motion_enabled} /> },
                    Route::Learn => html! { <LearnPage /> },
                    Route::About => html! { <AboutPage /> },
                }
            }
            </main>
            <Footer
                animations_enabled={*animations}
                on_animations_toggle={on_animations_toggle}
            />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    route: Route,
    theme_mode: ThemeMode,
    on_navigate: Callback<Route>,
    on_theme_toggle: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let nav_link = |target: Route| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_navigate.emit(target);
        });
        let href = if target.hash().is_empty() { "#" } else { target.hash() };
        html! {
            <a
                class={classes!("nav-link", (props.route == target).then_some("active"))}
                href={href}
                onclick={onclick}
            >
                { target.title() }
            </a>
        }
    };
    let theme_icon = match props.theme_mode {
        ThemeMode::System => "◐",
        ThemeMode::Light => "☀",
        ThemeMode::Dark => "🌙",
    };
    html! {
        <header class="header">
            <span class="wordmark">{ "Nijinarabe" }</span>
            <nav class="nav">
                { nav_link(Route::Home) }
                { nav_link(Route::Play) }
                { nav_link(Route::Learn) }
                { nav_link(Route::About) }
                <button
                    class="theme-toggle"
                    title={props.theme_mode.label()}
                    onclick={props.on_theme_toggle.clone()}
                >
                    { theme_icon }
                </button>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    animations_enabled: bool,
    on_animations_toggle: Callback<MouseEvent>,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <span>{ "Nijinarabe, an educational rainbow game. Settings never leave this browser." }</span>
            <button class="footer-toggle" onclick={props.on_animations_toggle.clone()}>
                { if props.animations_enabled { "Backdrop: on" } else { "Backdrop: off" } }
            </button>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
struct BackdropProps {
    animate: bool,
}

#[function_component(Backdrop)]
fn backdrop(props: &BackdropProps) -> Html {
    let circles = use_memo((), |_| backdrop_circles(BACKDROP_SEED));
    html! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-gradient"></div>
            { for circles.iter().map(|circle| backdrop_circle_view(circle, props.animate)) }
        </div>
    }
}

fn backdrop_circle_view(circle: &BackdropCircle, animate: bool) -> Html {
    let mut style = format!(
        "left: {:.1}%; top: {:.1}%; width: {:.0}px; height: {:.0}px; \
         background: {}; opacity: {:.2}; filter: blur({:.0}px);",
        circle.left_pct,
        circle.top_pct,
        circle.size_px,
        circle.size_px,
        circle.color.hex(),
        circle.opacity,
        circle.size_px * 0.35,
    );
    if animate {
        style.push_str(&format!(
            " animation-duration: {:.1}s; animation-delay: -{:.1}s;",
            circle.drift_s, circle.delay_s,
        ));
    }
    html! {
        <div
            class={classes!("backdrop-circle", animate.then_some("drifting"))}
            style={style}
        ></div>
    }
}

#[derive(Properties, PartialEq)]
struct HomeProps {
    on_navigate: Callback<Route>,
}

#[function_component(HomePage)]
fn home_page(props: &HomeProps) -> Html {
    let go = |target: Route| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_event: MouseEvent| on_navigate.emit(target))
    };
    html! {
        <section class="home">
            <h1 class="home-title">{ "Order the rainbow" }</h1>
            <p class="home-tagline">
                { "Seven colors, one correct order. Drag the blocks until the spectrum lines up." }
            </p>
            <div class="spectrum-preview">
                { for SPECTRUM.iter().map(|color| html! {
                    <span
                        class="spectrum-chip"
                        title={color.label()}
                        style={format!("background-color: {};", color.hex())}
                    ></span>
                }) }
            </div>
            <div class="home-actions">
                <button class="button primary" onclick={go(Route::Play)}>{ "Play" }</button>
                <button class="button outline" onclick={go(Route::Learn)}>{ "Learn the colors" }</button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PlayProps {
    motion_enabled: bool,
}

#[function_component(PlayPage)]
fn play_page(props: &PlayProps) -> Html {
    let game = use_state(|| GameState::new(time_nonce(0)));
    let tracker = use_state(DragTracker::default);
    let show_instructions = use_state(|| false);

    let checked = matches!(game.phase(), GamePhase::Checked { .. });
    let report = checked.then(|| game.report());

    let apply_reorder = {
        let game = game.clone();
        let tracker = tracker.clone();
        move || {
            let mut next_tracker = *tracker;
            if let Some(command) = next_tracker.finish() {
                let mut next_game = (*game).clone();
                match next_game.reorder(command.src, command.dst) {
                    Ok(()) => game.set(next_game),
                    Err(error) => {
                        gloo::console::warn!("reorder rejected", error.to_string());
                    }
                }
            }
            tracker.set(next_tracker);
        }
    };

    let on_drag_start = {
        let tracker = tracker.clone();
        Callback::from(move |(index, event): (usize, DragEvent)| {
            if let Some(transfer) = event.data_transfer() {
                let _ = transfer.set_data("text/plain", &index.to_string());
                transfer.set_effect_allowed("move");
            }
            let mut next = *tracker;
            next.begin(index);
            tracker.set(next);
        })
    };

    let on_drag_over = {
        let tracker = tracker.clone();
        Callback::from(move |(index, event): (usize, DragEvent)| {
            event.prevent_default();
            let mut next = *tracker;
            next.hover(index);
            if next != *tracker {
                tracker.set(next);
            }
        })
    };

    let on_drag_leave = {
        let tracker = tracker.clone();
        Callback::from(move |index: usize| {
            let mut next = *tracker;
            next.leave(index);
            if next != *tracker {
                tracker.set(next);
            }
        })
    };

    let on_drop = {
        let apply_reorder = apply_reorder.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            apply_reorder();
        })
    };

    // fallback when the drop landed outside a slot; finish() is a no-op if
    // the drop handler already consumed the gesture
    let on_drag_end = {
        let apply_reorder = apply_reorder.clone();
        Callback::from(move |_event: DragEvent| {
            apply_reorder();
        })
    };

    let on_check = {
        let game = game.clone();
        Callback::from(move |_event: MouseEvent| {
            let mut next = (*game).clone();
            next.check();
            game.set(next);
        })
    };

    let on_play_again = {
        let game = game.clone();
        Callback::from(move |_event: MouseEvent| {
            let mut next = (*game).clone();
            next.play_again(time_nonce(next.shuffle_nonce()));
            game.set(next);
        })
    };

    let on_next_level = {
        let game = game.clone();
        Callback::from(move |_event: MouseEvent| {
            let mut next = (*game).clone();
            match next.next_level(time_nonce(next.shuffle_nonce())) {
                Ok(_) => game.set(next),
                Err(error) => {
                    gloo::console::warn!("advance rejected", error.to_string());
                }
            }
        })
    };

    let open_instructions = {
        let show_instructions = show_instructions.clone();
        Callback::from(move |_event: MouseEvent| show_instructions.set(true))
    };
    let close_instructions = {
        let show_instructions = show_instructions.clone();
        Callback::from(move |_event: ()| show_instructions.set(false))
    };

    html! {
        <section class="play">
            <h1 class="play-title">{ "Order the rainbow" }</h1>
            <div class={classes!("game-card", tracker.is_dragging().then_some("drag-active"))}>
                <div class="level-indicator">
                    { format!("Level {} of {}", game.level(), MAX_LEVEL) }
                </div>
                <p class="instructions-text">
                    { "Drag the colors into the correct rainbow order." }
                </p>
                <ColorList
                    colors={game.puzzle().slots().to_vec()}
                    placements={report.map(|r| r.placements.to_vec())}
                    drag_source={tracker.source()}
                    drop_target={tracker.hover_target()}
                    locked={checked}
                    on_drag_start={on_drag_start}
                    on_drag_over={on_drag_over}
                    on_drag_leave={on_drag_leave}
                    on_drop={on_drop}
                    on_drag_end={on_drag_end}
                />
                {
                    if let Some(report) = report {
                        html! {
                            <ResultPanel
                                solved={report.solved}
                                completed={game.completed()}
                                can_advance={game.can_advance()}
                                motion_enabled={props.motion_enabled}
                                confetti_seed={game.shuffle_nonce()}
                                on_play_again={on_play_again}
                                on_next_level={on_next_level}
                            />
                        }
                    } else {
                        html! {
                            <div class="game-controls">
                                <button class="button primary" onclick={on_check}>{ "Check order" }</button>
                                <button class="button secondary" onclick={open_instructions}>{ "Instructions" }</button>
                                <button class="button outline" onclick={on_play_again.clone()}>{ "Reset" }</button>
                            </div>
                        }
                    }
                }
            </div>
            <Modal open={*show_instructions} title="How to play" on_close={close_instructions}>
                <p>{ "The goal is to arrange the colors of the rainbow in their natural order." }</p>
                <ul>
                    <li>{ "Drag and drop the color blocks to reorder them." }</li>
                    <li>{ "Press \"Check order\" once you think the order is right." }</li>
                    <li>{ "A correct order unlocks the next level; otherwise try again." }</li>
                </ul>
                <p>
                    { "The correct order is: " }
                    <strong>{ "Red, Orange, Yellow, Green, Blue, Indigo and Violet" }</strong>
                    { "." }
                </p>
            </Modal>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ColorListProps {
    colors: Vec<Color>,
    placements: Option<Vec<bool>>,
    drag_source: Option<usize>,
    drop_target: Option<usize>,
    locked: bool,
    on_drag_start: Callback<(usize, DragEvent)>,
    on_drag_over: Callback<(usize, DragEvent)>,
    on_drag_leave: Callback<usize>,
    on_drop: Callback<DragEvent>,
    on_drag_end: Callback<DragEvent>,
}

#[function_component(ColorList)]
fn color_list(props: &ColorListProps) -> Html {
    let slot_view = |index: usize, color: Color| {
        let feedback = props
            .placements
            .as_ref()
            .and_then(|placements| placements.get(index).copied())
            .map(|placed| if placed { "correct" } else { "incorrect" });
        let dragging = props.drag_source == Some(index);
        let targeted = props.drop_target == Some(index);

        let ondragstart = {
            let on_drag_start = props.on_drag_start.clone();
            Callback::from(move |event: DragEvent| on_drag_start.emit((index, event)))
        };
        let ondragover = {
            let on_drag_over = props.on_drag_over.clone();
            Callback::from(move |event: DragEvent| on_drag_over.emit((index, event)))
        };
        let ondragenter = {
            let on_drag_over = props.on_drag_over.clone();
            Callback::from(move |event: DragEvent| on_drag_over.emit((index, event)))
        };
        let ondragleave = {
            let on_drag_leave = props.on_drag_leave.clone();
            Callback::from(move |_event: DragEvent| on_drag_leave.emit(index))
        };

        html! {
            <li
                key={color.slug()}
                class={classes!(
                    "color-block",
                    feedback,
                    dragging.then_some("dragging"),
                    targeted.then_some("drop-target"),
                )}
                style={format!("background-color: {};", color.hex())}
                draggable={if props.locked { "false" } else { "true" }}
                ondragstart={ondragstart}
                ondragover={ondragover}
                ondragenter={ondragenter}
                ondragleave={ondragleave}
                ondrop={props.on_drop.clone()}
                ondragend={props.on_drag_end.clone()}
            >
                <span class="color-block-index">{ index + 1 }</span>
                <span class="color-block-label">{ color.label() }</span>
            </li>
        }
    };
    html! {
        <ul class="color-list">
            { for props.colors.iter().enumerate().map(|(index, color)| slot_view(index, *color)) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct ResultPanelProps {
    solved: bool,
    completed: bool,
    can_advance: bool,
    motion_enabled: bool,
    confetti_seed: u32,
    on_play_again: Callback<MouseEvent>,
    on_next_level: Callback<MouseEvent>,
}

#[function_component(ResultPanel)]
fn result_panel(props: &ResultPanelProps) -> Html {
    let (title, message) = if props.completed {
        (
            "You finished the rainbow!",
            "Every level cleared. Play again to keep the colors flowing.",
        )
    } else if props.solved {
        (
            "Well done!",
            "That is the order of the rainbow. Ready for the next level?",
        )
    } else {
        (
            "Not quite...",
            "The order is not right yet. Give it another try.",
        )
    };
    html! {
        <div class="result-panel">
            <h2 class={classes!("result-title", if props.solved { "success" } else { "failure" })}>
                { title }
            </h2>
            <p class="result-message">{ message }</p>
            <div class="game-controls">
                <button
                    class={classes!("button", if props.solved { "secondary" } else { "primary" })}
                    onclick={props.on_play_again.clone()}
                >
                    { if props.solved { "Play again" } else { "Try again" } }
                </button>
                {
                    if props.can_advance {
                        html! {
                            <button class="button rainbow" onclick={props.on_next_level.clone()}>
                                { "Next level" }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                if props.solved && props.motion_enabled {
                    confetti_view(props.confetti_seed)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn confetti_view(seed: u32) -> Html {
    let pieces = confetti_burst(splitmix32(seed ^ 0xC0FE));
    html! {
        <div class="confetti" aria-hidden="true">
            { for pieces.iter().map(confetti_piece_view) }
        </div>
    }
}

fn confetti_piece_view(piece: &ConfettiPiece) -> Html {
    let style = format!(
        "left: {:.1}%; width: {:.0}px; height: {:.0}px; background-color: {}; \
         border-radius: {}; animation-duration: {:.1}s; animation-delay: {:.1}s;",
        piece.left_pct,
        piece.size_px,
        piece.size_px,
        piece.color.hex(),
        if piece.round { "50%" } else { "0" },
        piece.fall_s,
        piece.delay_s,
    );
    html! { <span class="confetti-piece" style={style}></span> }
}

#[function_component(LearnPage)]
fn learn_page() -> Html {
    html! {
        <section class="learn">
            <h1>{ "The seven colors" }</h1>
            <p>
                { "Sunlight bends as it passes through raindrops, and each wavelength \
                   bends a little differently. The result always comes out in the same \
                   order, from the longest wavelength to the shortest." }
            </p>
            <ul class="color-catalog">
                { for COLOR_CATALOG.iter().map(|entry| {
                    let (low, high) = entry.wavelength_nm;
                    html! {
                        <li class="catalog-row" key={entry.slug}>
                            <span
                                class="catalog-swatch"
                                style={format!("background-color: {};", entry.hex)}
                            ></span>
                            <span class="catalog-label">{ entry.label }</span>
                            <span class="catalog-hex">{ entry.hex }</span>
                            <span class="catalog-wavelength">{ format!("{low}–{high} nm") }</span>
                        </li>
                    }
                }) }
            </ul>
            <p>
                { "Remember it as Red, Orange, Yellow, Green, Blue, Indigo, Violet. \
                   Then head to the play page and put it into practice." }
            </p>
        </section>
    }
}

#[function_component(AboutPage)]
fn about_page() -> Html {
    html! {
        <section class="about">
            <h1>{ "About" }</h1>
            <p>
                { "Nijinarabe is a small educational game about the order of the \
                   colors in a rainbow. There are no accounts and no servers: the \
                   whole game runs in your browser, and the only thing it remembers \
                   is your theme and backdrop preference." }
            </p>
            <p>
                { "Built in Rust with the yew framework, compiled to WebAssembly." }
            </p>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ModalProps {
    open: bool,
    title: AttrValue,
    on_close: Callback<()>,
    children: Children,
}

#[function_component(Modal)]
fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_event: MouseEvent| on_close.emit(()))
    };
    let on_dialog_click = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_event: MouseEvent| on_close.emit(()))
    };
    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class="modal" role="dialog" aria-modal="true" onclick={on_dialog_click}>
                <div class="modal-header">
                    <h2>{ props.title.clone() }</h2>
                    <button class="modal-close" onclick={on_close_click}>{ "✕" }</button>
                </div>
                <div class="modal-body">
                    { props.children.clone() }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_router::parse_route;
    use crate::core::{apply_document_theme, dark_theme_active};
    use console_error_panic_hook::set_once as set_panic_hook;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn route_parsing_round_trips() {
        for route in [Route::Home, Route::Play, Route::Learn, Route::About] {
            assert_eq!(parse_route(route.hash()), route);
        }
        assert_eq!(parse_route("#PLAY"), Route::Play);
        assert_eq!(parse_route("#learn?from=nav"), Route::Learn);
        assert_eq!(parse_route("#somewhere-else"), Route::Home);
        assert_eq!(parse_route(""), Route::Home);
    }

    #[wasm_bindgen_test]
    fn theme_cycle_visits_every_mode() {
        let start = ThemeMode::System;
        let second = start.cycled();
        let third = second.cycled();
        assert_eq!(second, ThemeMode::Light);
        assert_eq!(third, ThemeMode::Dark);
        assert_eq!(third.cycled(), start);
    }

    #[wasm_bindgen_test]
    fn dark_class_follows_mode() {
        set_panic_hook();
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .expect("body available");
        apply_document_theme(ThemeMode::Dark);
        assert!(body.class_list().contains("dark-mode"));
        assert!(dark_theme_active(ThemeMode::Dark));
        apply_document_theme(ThemeMode::Light);
        assert!(!body.class_list().contains("dark-mode"));
        assert!(!dark_theme_active(ThemeMode::Light));
    }

    #[wasm_bindgen_test]
    fn wasm_smoke() {
        set_panic_hook();
        assert_eq!(1 + 1, 2);
    }
}
