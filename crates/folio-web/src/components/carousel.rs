//! Image gallery with a modal carousel

use folio_core::carousel::Carousel;
use leptos::*;

/// Thumbnail grid; clicking a thumbnail opens the carousel on it
#[component]
pub fn Gallery(images: Vec<String>, #[prop(into)] alt: String) -> impl IntoView {
    let state = create_rw_signal(Carousel::new(images.len()));
    let images = store_value(images);
    let alt = store_value(alt);

    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
            {images.get_value().into_iter().enumerate().map(|(index, src)| view! {
                <button
                    type="button"
                    class="block overflow-hidden rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    on:click=move |_| state.update(|c| c.open_at(index))
                >
                    <img src=src alt=alt.get_value() class="w-full h-48 object-cover hover:scale-105 transition-transform" />
                </button>
            }).collect_view()}
        </div>
        <CarouselModal images=images state=state />
    }
}

#[component]
pub fn CarouselModal(images: StoredValue<Vec<String>>, state: RwSignal<Carousel>) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if !state.with_untracked(Carousel::is_open) {
            return;
        }
        match ev.key().as_str() {
            "ArrowRight" => state.update(Carousel::next),
            "ArrowLeft" => state.update(Carousel::previous),
            "Escape" => state.update(Carousel::close),
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());

    let current_src = move || {
        let index = state.with(Carousel::current);
        images.with_value(|list| list.get(index).cloned().unwrap_or_default())
    };

    view! {
        {move || state.with(Carousel::is_open).then(|| view! {
            <div class="fixed inset-0 z-50 bg-black/90 flex items-center justify-center">
                <button
                    class="absolute top-4 right-4 text-gray-300 hover:text-white text-3xl"
                    on:click=move |_| state.update(Carousel::close)
                >
                    "×"
                </button>
                <button
                    class="absolute left-4 text-gray-300 hover:text-white text-4xl px-4"
                    on:click=move |_| state.update(Carousel::previous)
                >
                    "‹"
                </button>
                <img src=current_src class="max-h-[85vh] max-w-[85vw] object-contain rounded-lg" />
                <button
                    class="absolute right-4 text-gray-300 hover:text-white text-4xl px-4"
                    on:click=move |_| state.update(Carousel::next)
                >
                    "›"
                </button>
                <p class="absolute bottom-4 text-sm text-gray-400">
                    {move || state.with(Carousel::position)}
                </p>
            </div>
        })}
    }
}
