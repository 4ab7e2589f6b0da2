use slide_nav::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
