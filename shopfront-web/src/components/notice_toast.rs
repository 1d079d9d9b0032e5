use crate::models::app_state::AppState;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

const NOTICE_LIFETIME_MS: u32 = 3_000;

#[function_component(NoticeToast)]
pub fn notice_toast() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let notice = state.notice.clone();

    use_effect_with(notice.clone(), move |notice| {
        if let Some(shown) = notice.clone() {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
                // a newer notice keeps its own timer
                dispatch.reduce_mut(|state| {
                    if state.notice.as_ref() == Some(&shown) {
                        state.notice = None;
                    }
                });
            });
        }
        || ()
    });

    notice.map_or_else(
        || html! {},
        |notice| {
            html! {
                <div class="toast toast-top toast-center">
                    <div class={notice.kind.css_class()}>
                        <span>{ notice.text }</span>
                    </div>
                </div>
            }
        },
    )
}
