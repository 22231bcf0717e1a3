//! Multi-image picker with drag & drop and live previews

use folio_core::upload::{FileId, FileMeta, UploadPolicy, UploadQueue};
use folio_core::utils::format_size;
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileList, FileReader, HtmlInputElement};

/// Browser file wrapped for queue validation
struct PickedFile(File);

impl FileMeta for PickedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    fn mime(&self) -> String {
        self.0.type_()
    }
}

/// Upload state owned by the form; the component only edits it
#[derive(Clone, Copy)]
pub struct UploadHandle {
    pub queue: RwSignal<UploadQueue>,
    files: StoredValue<Vec<(FileId, File)>>,
}

impl UploadHandle {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            queue: create_rw_signal(UploadQueue::new(policy)),
            files: store_value(Vec::new()),
        }
    }

    /// Start over from the images already stored for the record
    pub fn reset(&self, existing: Vec<String>) {
        self.queue
            .update(|q| *q = UploadQueue::new(q.policy().clone()).with_existing(existing));
        self.files.set_value(Vec::new());
    }

    /// Picked files still selected, in display order
    pub fn files(&self) -> Vec<File> {
        let ids = self.queue.with_untracked(|q| q.ids());
        self.files.with_value(|files| {
            ids.iter()
                .filter_map(|id| files.iter().find(|(f, _)| f == id).map(|(_, file)| file.clone()))
                .collect()
        })
    }

    pub fn removed_existing(&self) -> Vec<String> {
        self.queue.with_untracked(|q| q.removed_existing())
    }

    fn add(&self, list: FileList) {
        let picked: Vec<PickedFile> = (0..list.length())
            .filter_map(|i| list.get(i))
            .map(PickedFile)
            .collect();

        let mut accepted = Vec::new();
        self.queue.update(|q| accepted = q.add_batch(picked));

        for (id, PickedFile(file)) in accepted {
            read_preview(self.queue, id, &file);
            self.files.update_value(|files| files.push((id, file)));
        }
    }

    fn remove(&self, id: FileId) {
        self.queue.update(|q| {
            q.remove(id);
        });
        self.files.update_value(|files| files.retain(|(f, _)| *f != id));
    }
}

/// Read `file` as a data URL and attach it to the entry with `id`
fn read_preview(queue: RwSignal<UploadQueue>, id: FileId, file: &File) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("FileReader unavailable: {:?}", e);
            return;
        }
    };

    let source = reader.clone();
    let onload = Closure::once_into_js(move |_: web_sys::ProgressEvent| {
        let Some(url) = source.result().ok().and_then(|r| r.as_string()) else {
            return;
        };
        queue.update(|q| {
            if !q.attach_preview(id, url) {
                log::debug!("Dropped preview for removed file {}", id.value());
            }
        });
    });
    reader.set_onload(Some(onload.unchecked_ref()));

    if let Err(e) = reader.read_as_data_url(file) {
        log::warn!("Could not read {}: {:?}", file.name(), e);
    }
}

#[component]
pub fn ImageUpload(handle: UploadHandle, #[prop(optional)] single: bool) -> impl IntoView {
    let (is_dragging, set_dragging) = create_signal(false);
    let file_input_ref = create_node_ref::<html::Input>();
    let queue = handle.queue;

    let accept = queue.with_untracked(|q| q.policy().accept_attr());
    let limits = queue.with_untracked(|q| {
        let p = q.policy();
        format!(
            "Up to {} image(s), {} each",
            p.max_files,
            format_size(p.max_bytes())
        )
    });

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            handle.add(files);
        }
    };

    let on_file_select = move |ev: leptos::ev::Event| {
        let Some(input) = ev.target().map(|t| t.unchecked_into::<HtmlInputElement>()) else {
            return;
        };
        if let Some(files) = input.files() {
            handle.add(files);
        }
        // Allow picking the same file again after removing it
        input.set_value("");
    };

    let on_browse_click = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="space-y-4">
            <div
                class=move || format!(
                    "border-2 border-dashed rounded-xl p-6 text-center transition-all {}",
                    if is_dragging.get() {
                        "border-blue-500 bg-blue-500/10"
                    } else {
                        "border-gray-600 hover:border-gray-500"
                    }
                )
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <input
                    type="file"
                    accept=accept
                    multiple=!single
                    node_ref=file_input_ref
                    class="hidden"
                    on:change=on_file_select
                />
                <p class="text-gray-300 mb-2">"Drag and drop images here"</p>
                <button
                    type="button"
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 text-white rounded-lg transition-colors"
                    on:click=on_browse_click
                >
                    "Browse"
                </button>
                <p class="text-xs text-gray-500 mt-3">{limits}</p>
            </div>

            {move || {
                let messages = queue.with(|q| q.error_messages());
                (!messages.is_empty()).then(|| view! {
                    <ul class="bg-red-900/30 border border-red-500 text-red-200 px-4 py-3 rounded space-y-1 text-sm">
                        {messages.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                    </ul>
                })
            }}

            <div class="grid grid-cols-3 md:grid-cols-4 gap-3">
                {move || queue.with(|q| q.existing().to_vec()).into_iter().map(|image| {
                    let url = image.url.clone();
                    view! {
                        <div class=if image.removed { "relative opacity-30" } else { "relative" }>
                            <img src=image.url class="w-full h-24 object-cover rounded-lg" />
                            <button
                                type="button"
                                class="absolute top-1 right-1 px-2 py-0.5 text-xs bg-gray-900/80 text-white rounded"
                                on:click=move |_| queue.update(|q| {
                                    q.toggle_existing(&url);
                                })
                            >
                                {if image.removed { "Undo" } else { "Remove" }}
                            </button>
                        </div>
                    }
                }).collect_view()}

                {move || queue.with(|q| q.selected().to_vec()).into_iter().map(|file| {
                    let id = file.id;
                    view! {
                        <div class="relative">
                            {match file.preview {
                                Some(src) => view! {
                                    <img src=src class="w-full h-24 object-cover rounded-lg" />
                                }.into_view(),
                                None => view! {
                                    <div class="w-full h-24 rounded-lg bg-gray-700 animate-pulse" />
                                }.into_view(),
                            }}
                            <p class="text-xs text-gray-400 truncate mt-1" title=file.name.clone()>
                                {file.name.clone()} " · " {format_size(file.size)}
                            </p>
                            <button
                                type="button"
                                class="absolute top-1 right-1 px-2 py-0.5 text-xs bg-gray-900/80 text-white rounded"
                                on:click=move |_| handle.remove(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
