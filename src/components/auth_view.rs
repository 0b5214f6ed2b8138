//! Auth View Component
//!
//! Login/register tabs shown while no session exists. A successful login
//! establishes the session, which swaps the root view to the application
//! shell.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::auth;
use crate::session::use_session;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn AuthView() -> impl IntoView {
    let session = use_session();
    let (mode, set_mode) = signal(AuthMode::Login);

    let (login_username, set_login_username) = signal(String::new());
    let (login_password, set_login_password) = signal(String::new());

    let (reg_username, set_reg_username) = signal(String::new());
    let (reg_email, set_reg_email) = signal(String::new());
    let (reg_password, set_reg_password) = signal(String::new());
    let (reg_confirm, set_reg_confirm) = signal(String::new());

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = login_username.get();
        let password = login_password.get();
        spawn_local(async move {
            match auth::login(username, password).await {
                Ok(new_session) => session.establish(new_session),
                Err(err) => {
                    web_sys::console::error_1(&format!("login failed: {err}").into());
                    gloo_dialogs::alert(err.server_message().unwrap_or("Login failed"));
                }
            }
        });
    };

    let on_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = reg_username.get();
        let email = reg_email.get();
        let password = reg_password.get();
        let confirm = reg_confirm.get();
        spawn_local(async move {
            match auth::register(username, email, password, confirm).await {
                Ok(()) => {
                    gloo_dialogs::alert("Registration successful! Please login.");
                    set_mode.set(AuthMode::Login);
                }
                Err(crate::api::ApiError::PasswordMismatch) => {
                    gloo_dialogs::alert("Passwords do not match");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("registration failed: {err}").into());
                    gloo_dialogs::alert(err.server_message().unwrap_or("Registration failed"));
                }
            }
        });
    };

    view! {
        <div class="auth-panel">
            <h1>"StudyDash"</h1>
            <div class="tab-bar">
                <button
                    class=move || if mode.get() == AuthMode::Login { "active" } else { "" }
                    on:click=move |_| set_mode.set(AuthMode::Login)
                >
                    "Login"
                </button>
                <button
                    class=move || if mode.get() == AuthMode::Register { "active" } else { "" }
                    on:click=move |_| set_mode.set(AuthMode::Register)
                >
                    "Register"
                </button>
            </div>

            {move || if mode.get() == AuthMode::Login {
                view! {
                    <form on:submit=on_login>
                        <input
                            type="text"
                            placeholder="Username"
                            prop:value=move || login_username.get()
                            on:input=move |ev| set_login_username.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || login_password.get()
                            on:input=move |ev| set_login_password.set(event_target_value(&ev))
                        />
                        <button type="submit">"Login"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <form on:submit=on_register>
                        <input
                            type="text"
                            placeholder="Username"
                            prop:value=move || reg_username.get()
                            on:input=move |ev| set_reg_username.set(event_target_value(&ev))
                        />
                        <input
                            type="email"
                            placeholder="Email"
                            prop:value=move || reg_email.get()
                            on:input=move |ev| set_reg_email.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || reg_password.get()
                            on:input=move |ev| set_reg_password.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || reg_confirm.get()
                            on:input=move |ev| set_reg_confirm.set(event_target_value(&ev))
                        />
                        <button type="submit">"Register"</button>
                    </form>
                }.into_any()
            }}
        </div>
    }
}
