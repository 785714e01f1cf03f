//! Menu lateral com grupos recolhíveis.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "d400_overview",
            label: tab_label_for_key("d400_overview"),
            icon: "layout-dashboard",
            items: vec![],
            admin_only: false,
        },
        MenuGroup {
            id: "customers",
            label: "Clientes",
            icon: "users",
            items: vec![
                ("a001_customer", tab_label_for_key("a001_customer"), "users"),
                ("a001_customer_new", tab_label_for_key("a001_customer_new"), "user-plus"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "subscriptions",
            label: "Assinaturas",
            icon: "repeat",
            items: vec![
                ("a003_subscription", tab_label_for_key("a003_subscription"), "repeat"),
                ("a002_plan", tab_label_for_key("a002_plan"), "scissors"),
                ("a004_payment_new", tab_label_for_key("a004_payment_new"), "credit-card"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "a005_appointment",
            label: tab_label_for_key("a005_appointment"),
            icon: "calendar",
            items: vec![],
            admin_only: false,
        },
        MenuGroup {
            id: "funnel",
            label: "Funil de cadastro",
            icon: "filter",
            items: vec![
                ("a006_funnel_interaction", tab_label_for_key("a006_funnel_interaction"), "filter"),
                ("d401_funnel_analytics", tab_label_for_key("d401_funnel_analytics"), "bar-chart"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "p900_reports",
            label: tab_label_for_key("p900_reports"),
            icon: "file-text",
            items: vec![],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    // Grupos restritos são filtrados uma vez, na montagem
    let is_admin = auth_state.with_untracked(|state| {
        state
            .user_info
            .as_ref()
            .map(|u| u.is_admin())
            .unwrap_or(false)
    });

    let expanded_groups = RwSignal::new(vec![
        "customers".to_string(),
        "subscriptions".to_string(),
        "funnel".to_string(),
    ]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().filter(|group| is_admin || !group.admin_only).map(|group| {
                    let group_id = group.id.to_string();
                    let has_children = !group.items.is_empty();

                    let group_id_stored = StoredValue::new(group_id.clone());
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    let gid = group_id_stored.get_value();
                                    !has_children && ctx.active.get().as_ref().map(|a| a == &gid).unwrap_or(false)
                                }
                                style:padding-left="12px"
                                on:click=move |_| {
                                    if has_children {
                                        let gid = group_id_for_click.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    } else {
                                        ctx.open_tab(group.id, group.label);
                                    }
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                {has_children.then(|| {
                                    let gid_exp = group_id_for_exp.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    }
                                })}
                            </div>

                            {has_children.then(|| {
                                let gid_show = group_id.clone();
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            ctx.active.get().as_deref() == Some(id)
                                                        }
                                                        style:padding-left="10px"
                                                        on:click=move |_| ctx.open_tab(id, label)
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            })}
                        </div>
                    }
                }).collect_view()}
        </div>
    }
}
