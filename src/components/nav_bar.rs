use yew::prelude::*;

// Fixed ids: the input dispatcher finds these buttons by id and clicks them.
#[derive(Properties, PartialEq, Clone)]
pub struct NavBarProps {
    pub position_label: String,
    pub on_up: Callback<()>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let up = {
        let cb = props.on_up.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let prev = {
        let cb = props.on_prev.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let next = {
        let cb = props.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <span style="font-size:12px; opacity:0.7; margin-right:6px;">{ props.position_label.clone() }</span>
        <button id="nav-prev" onclick={prev}>{"←"}</button>
        <button id="nav-up" onclick={up}>{"Overview"}</button>
        <button id="nav-next" onclick={next}>{"→"}</button>
    </div>}
}
