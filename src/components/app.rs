use yew::prelude::*;

use super::nav_bar::NavBar;
use crate::listeners::NavListeners;
use crate::util::clog;

struct Slide {
    title: &'static str,
    body: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        title: "Slide navigation",
        body: "Arrow keys or swipe to move between slides. Escape opens the overview.",
    },
    Slide {
        title: "Keyboard",
        body: "ArrowLeft goes back, ArrowRight goes forward. Shortcuts with meta, alt or ctrl held are left to the browser.",
    },
    Slide {
        title: "Touch",
        body: "A horizontal swipe of more than 40 screen units navigates. Mostly-vertical movement scrolls as usual.",
    },
    Slide {
        title: "The end",
        body: "Navigation clamps here instead of wrapping around.",
    },
];

#[function_component(App)]
pub fn app() -> Html {
    let index = use_state(|| 0usize);
    let overview = use_state(|| false);

    // Global key/touch dispatch for the lifetime of the app.
    use_effect_with((), move |_| {
        let document = web_sys::window()
            .expect("no global `window` exists")
            .document()
            .expect("should have a document on window");
        let listeners = NavListeners::attach(&document);
        move || listeners.detach()
    });

    let go_prev = {
        let index = index.clone();
        let overview = overview.clone();
        Callback::from(move |_| {
            if !*overview && *index > 0 {
                index.set(*index - 1);
                clog(&format!("slide {}", *index));
            }
        })
    };
    let go_next = {
        let index = index.clone();
        let overview = overview.clone();
        Callback::from(move |_| {
            if !*overview && *index + 1 < SLIDES.len() {
                index.set(*index + 1);
                clog(&format!("slide {}", *index + 2));
            }
        })
    };
    let go_up = {
        let overview = overview.clone();
        Callback::from(move |_| overview.set(true))
    };
    let pick_slide = {
        let index = index.clone();
        let overview = overview.clone();
        move |i: usize| {
            let index = index.clone();
            let overview = overview.clone();
            Callback::from(move |_: MouseEvent| {
                index.set(i);
                overview.set(false);
            })
        }
    };

    let slide = &SLIDES[*index];
    let position_label = format!("{} / {}", *index + 1, SLIDES.len());

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            {
                if *overview {
                    html! {
                        <div style="padding:48px; display:flex; flex-direction:column; gap:12px;">
                            <h2 style="margin:0 0 12px 0;">{"Overview"}</h2>
                            { for SLIDES.iter().enumerate().map(|(i, s)| {
                                let border = if i == *index { "1px solid #58a6ff" } else { "1px solid #30363d" };
                                html! {
                                    <div onclick={pick_slide(i)}
                                        style={format!("background:#161b22; border:{}; border-radius:8px; padding:12px 16px; cursor:pointer;", border)}>
                                        <span style="opacity:0.6; margin-right:10px;">{ format!("{}.", i + 1) }</span>
                                        { s.title }
                                    </div>
                                }
                            }) }
                        </div>
                    }
                } else {
                    html! {
                        <div style="display:flex; flex-direction:column; justify-content:center; align-items:center; height:100%; text-align:center; padding:0 10vw;">
                            <h1 style="margin-bottom:16px;">{ slide.title }</h1>
                            <p style="font-size:18px; opacity:0.85; max-width:40em;">{ slide.body }</p>
                        </div>
                    }
                }
            }
            <NavBar position_label={position_label} on_up={go_up} on_prev={go_prev} on_next={go_next} />
        </div>
    }
}
