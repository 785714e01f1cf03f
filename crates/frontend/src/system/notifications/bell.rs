//! Sino de notificações do cabeçalho.
//!
//! Consulta `/notifications` a cada `ui.notification_poll_secs` enquanto o
//! componente está montado. Intervalo fixo: sem backoff após falhas.

use contracts::system::notifications::{unread_count, Notification};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::shared::api_client::ApiError;
use crate::shared::config::notification_poll_secs;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Notification>::new());
    let open = RwSignal::new(false);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let interval_ms = notification_poll_secs().saturating_mul(1000);
    spawn_local(async move {
        while alive.load(Ordering::Relaxed) {
            match api::fetch_notifications().await {
                Ok(list) => {
                    if alive.load(Ordering::Relaxed) {
                        set_items.set(list);
                    }
                }
                // sessão encerrada: a casca desmonta o sino
                Err(ApiError::Unauthorized) => break,
                Err(e) => log::warn!("notifications poll failed: {}", e),
            }
            TimeoutFuture::new(interval_ms).await;
        }
        log::debug!("notification polling stopped");
    });

    let unread = Memo::new(move |_| items.with(|list| unread_count(list)));

    let on_item_click = move |id: String| {
        spawn_local(async move {
            match api::mark_read(&id).await {
                Ok(()) => set_items.update(|list| {
                    if let Some(n) = list.iter_mut().find(|n| n.id == id) {
                        n.read = true;
                    }
                }),
                Err(e) => log::warn!("failed to mark notification {} as read: {}", id, e),
            }
        });
    };

    view! {
        <div class="notification-bell">
            <button
                class="top-header__icon-btn"
                title="Notificações"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("bell")}
                <Show when=move || { unread.get() > 0 }>
                    <span class="notification-bell__count">{move || unread.get()}</span>
                </Show>
            </button>

            <Show when=move || open.get()>
                <div class="notification-bell__panel">
                    {move || {
                        let list = items.get();
                        if list.is_empty() {
                            view! { <div class="notification-bell__empty">"Nenhuma notificação"</div> }.into_any()
                        } else {
                            list.into_iter().map(|n| {
                                let id = n.id.clone();
                                let is_read = n.read;
                                view! {
                                    <div
                                        class="notification-bell__item"
                                        class:notification-bell__item--unread=!is_read
                                        on:click=move |_| {
                                            if !is_read {
                                                on_item_click(id.clone());
                                            }
                                        }
                                    >
                                        <span class="notification-bell__icon">{icon(n.icon_name())}</span>
                                        <div class="notification-bell__body">
                                            <div class="notification-bell__title">{n.title.clone()}</div>
                                            <div class="notification-bell__message">{n.message.clone()}</div>
                                            <div class="notification-bell__time">{format_datetime(n.created_at)}</div>
                                        </div>
                                    </div>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
