//! User Management Page
//!
//! Account list with search and role filter, role overview and an add-user dialog.

use leptos::prelude::*;

use crate::components::Card;
use crate::filters::{initials, parse_choice, role_count, user_status_count, users_summary, UserFilter, ALL};
use crate::mock_data;
use crate::models::{Role, User, UserStatus};

/// Add-user dialog fields
#[derive(Clone, Debug, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::Technician,
            department: String::new(),
        }
    }
}

impl UserDraft {
    /// Name and email are required
    pub fn is_ready(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// New accounts start active and have not signed in yet
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
            department: self.department.trim().to_string(),
            last_active: "Never".to_string(),
            status: UserStatus::Active,
            permissions: Vec::new(),
        }
    }
}

/// One past the largest numeric id in the list
pub fn next_user_id(users: &[User]) -> String {
    let max = users.iter().filter_map(|u| u.id.parse::<u32>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}

#[component]
pub fn UserManagement() -> impl IntoView {
    let users = RwSignal::new(mock_data::users());
    let filter = RwSignal::new(UserFilter::default());
    let (dialog_open, set_dialog_open) = signal(false);
    let draft = RwSignal::new(UserDraft::default());

    let visible = move || filter.with(|f| users.with(|all| f.apply(all)));

    let close_dialog = move || {
        set_dialog_open.set(false);
        draft.set(UserDraft::default());
    };

    let create_user = move |_| {
        let current = draft.get_untracked();
        if !current.is_ready() {
            return;
        }
        users.update(|list| {
            let user = current.into_user(next_user_id(list));
            log::info!("[USERS] added {} as {}", user.name, user.role.name());
            list.push(user);
        });
        close_dialog();
    };

    let role_cards = Role::ALL
        .into_iter()
        .map(|role| view! {
            <Card title=role.name() description=role.description()>
                <div class="stack small">
                    <p>
                        <strong>"Users: "</strong>
                        {move || users.with(|list| role_count(list, role))}
                    </p>
                    <p><strong>"Permissions:"</strong></p>
                    <div class="badge-list">
                        {role.capabilities().iter().map(|c| view! {
                            <span class="badge outline tiny">{*c}</span>
                        }).collect_view()}
                    </div>
                </div>
            </Card>
        })
        .collect_view();

    let activity = mock_data::recent_activity()
        .into_iter()
        .map(|a| view! {
            <div class="list-row">
                <span class="dot primary"></span>
                <div>
                    <p class="small"><strong>{a.user}</strong> " " {a.action}</p>
                    <p class="muted tiny">{a.time}</p>
                </div>
            </div>
        })
        .collect_view();

    view! {
        <div class="page user-management">
            <Card title="User Management" description="Manage accounts, roles and access">
                <div class="toolbar">
                    <input
                        type="text"
                        class="input grow"
                        placeholder="Search users by name, email, or department..."
                        prop:value=move || filter.get().search
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.search = value);
                        }
                    />
                    <select
                        class="select"
                        on:change=move |ev| {
                            let role = parse_choice(&event_target_value(&ev), Role::parse);
                            filter.update(|f| f.role = role);
                        }
                    >
                        <option value=ALL>"All Roles"</option>
                        {Role::ALL.into_iter().map(|r| view! {
                            <option value=r.as_str()>{r.name()}</option>
                        }).collect_view()}
                    </select>
                    <button class="btn" on:click=move |_| set_dialog_open.set(true)>"+ Add User"</button>
                </div>
                <div class="row-between muted small">
                    <span>{move || users_summary(visible().len(), users.with(|list| list.len()))}</span>
                    <div class="row">
                        <span>
                            {move || format!("Active: {}", users.with(|list| user_status_count(list, UserStatus::Active)))}
                        </span>
                        <span>
                            {move || format!("Inactive: {}", users.with(|list| user_status_count(list, UserStatus::Inactive)))}
                        </span>
                    </div>
                </div>
            </Card>

            <Show when=move || dialog_open.get()>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h3>"Add New User"</h3>
                        <p class="muted small">"Create a new user account with appropriate role and permissions"</p>
                        <div class="stack">
                            <input
                                type="text"
                                class="input"
                                placeholder="Full Name"
                                prop:value=move || draft.get().name
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.name = value);
                                }
                            />
                            <input
                                type="email"
                                class="input"
                                placeholder="Email Address"
                                prop:value=move || draft.get().email
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.email = value);
                                }
                            />
                            <select
                                class="select"
                                prop:value=move || draft.get().role.as_str()
                                on:change=move |ev| {
                                    if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                        draft.update(|d| d.role = role);
                                    }
                                }
                            >
                                {Role::ALL.into_iter().map(|r| view! {
                                    <option value=r.as_str()>{r.name()}</option>
                                }).collect_view()}
                            </select>
                            <input
                                type="text"
                                class="input"
                                placeholder="Department"
                                prop:value=move || draft.get().department
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.department = value);
                                }
                            />
                            <div class="row">
                                <button class="btn grow" disabled=move || !draft.get().is_ready() on:click=create_user>
                                    "Create User"
                                </button>
                                <button class="btn outline" on:click=move |_| close_dialog()>"Cancel"</button>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>

            <Card title="User Accounts">
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"User"</th>
                                <th>"Role"</th>
                                <th>"Department"</th>
                                <th>"Last Active"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=visible
                                key=|u| u.id.clone()
                                children=|user| {
                                    let status_class = match user.status {
                                        UserStatus::Active => "badge",
                                        UserStatus::Inactive => "badge secondary",
                                    };
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="row">
                                                    <span class="avatar small">{initials(&user.name)}</span>
                                                    <div>
                                                        <p class="strong">{user.name.clone()}</p>
                                                        <p class="muted small">{user.email.clone()}</p>
                                                    </div>
                                                </div>
                                            </td>
                                            <td><span class=user.role.badge_class()>{user.role.name()}</span></td>
                                            <td>{user.department.clone()}</td>
                                            <td class="small">{user.last_active.clone()}</td>
                                            <td><span class=status_class>{user.status.as_str()}</span></td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Card>

            <div class="grid cols-4">{role_cards}</div>

            <Card title="Recent Activity" description="User login and system access logs">
                <div class="stack">{activity}</div>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_requires_name_and_email() {
        let mut draft = UserDraft::default();
        assert!(!draft.is_ready());
        draft.name = "Meera Iyer".to_string();
        assert!(!draft.is_ready());
        draft.email = "   ".to_string();
        assert!(!draft.is_ready());
        draft.email = "meera.iyer@indianrailways.gov.in".to_string();
        assert!(draft.is_ready());
    }

    #[test]
    fn test_draft_into_user() {
        let draft = UserDraft {
            name: " Meera Iyer ".to_string(),
            email: "meera.iyer@indianrailways.gov.in".to_string(),
            role: Role::Inspector,
            department: "Track Maintenance".to_string(),
        };
        let user = draft.into_user("6".to_string());
        assert_eq!(user.name, "Meera Iyer");
        assert_eq!(user.role, Role::Inspector);
        assert_eq!(user.status, UserStatus::Active);
    }

    #[test]
    fn test_next_user_id() {
        assert_eq!(next_user_id(&mock_data::users()), "6");
        assert_eq!(next_user_id(&[]), "1");
    }
}
