// ============================================================================
// LOGIN VIEW - Inicio de sesión y registro
// ============================================================================
// El estado del formulario vive en un Rc<RefCell> local; los cambios de modo,
// errores y "enviando" redibujan solo esta pantalla.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::app::AppAuth;
use crate::dom::{append_child, on_input, on_submit, replace_children, ElementBuilder};
use crate::viewmodels::{auth_error_message, validate_credentials, SignUpOutcome};
use crate::views::password_strength::{fill_password_strength, render_password_strength};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Clone, Debug, Default)]
struct LoginForm {
    mode: Mode,
    email: String,
    password: String,
    full_name: String,
    error: Option<String>,
    notice: Option<String>,
    submitting: bool,
}

type SharedForm = Rc<RefCell<LoginForm>>;

/// Renderizar vista de login
pub fn render_login(auth: &AppAuth) -> Result<Element, JsValue> {
    let form: SharedForm = Rc::new(RefCell::new(LoginForm::default()));
    let screen = ElementBuilder::new("div")?
        .class("login-screen")
        .build();
    draw(&screen, &form, auth)?;
    Ok(screen)
}

fn redraw(screen: &Element, form: &SharedForm, auth: &AppAuth) {
    if let Err(e) = draw(screen, form, auth) {
        log::error!("❌ [LOGIN] Error redibujando formulario: {:?}", e);
    }
}

fn draw(screen: &Element, form: &SharedForm, auth: &AppAuth) -> Result<(), JsValue> {
    let current = form.borrow().clone();
    let signing_up = current.mode == Mode::SignUp;

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("div")?.class("login-logo").text("💊").build())?
        .child(ElementBuilder::new("h1")?.text("Dr. Memo").build())?
        .child(
            ElementBuilder::new("p")?
                .text(if signing_up { "Crie sua conta" } else { "Entre na sua conta" })
                .build(),
        )?
        .build();

    let form_el = ElementBuilder::new("form")?
        .class("login-form")
        .build();

    if signing_up {
        let full_name = form.clone();
        append_child(&form_el, &text_field(
            "full-name",
            "Nome completo",
            "text",
            &current.full_name,
            move |value| full_name.borrow_mut().full_name = value,
        )?)?;
    }

    {
        let email = form.clone();
        append_child(&form_el, &text_field(
            "email",
            "E-mail",
            "email",
            &current.email,
            move |value| email.borrow_mut().email = value,
        )?)?;
    }

    let strength = render_password_strength(if signing_up { &current.password } else { "" })?;
    {
        let password = form.clone();
        let strength = strength.clone();
        append_child(&form_el, &text_field(
            "password",
            "Senha",
            "password",
            &current.password,
            move |value| {
                if signing_up {
                    if let Err(e) = fill_password_strength(&strength, &value) {
                        log::warn!("⚠️ [LOGIN] Error actualizando medidor: {:?}", e);
                    }
                }
                password.borrow_mut().password = value;
            },
        )?)?;
    }
    if signing_up {
        form_el.append_child(&strength)?;
    }

    if let Some(error) = &current.error {
        form_el.append_child(&ElementBuilder::new("p")?.class("login-error").text(error).build())?;
    }
    if let Some(notice) = &current.notice {
        form_el.append_child(&ElementBuilder::new("p")?.class("login-notice").text(notice).build())?;
    }

    let submit_label = match (current.submitting, current.mode) {
        (true, _) => "Aguarde...",
        (false, Mode::SignIn) => "Entrar",
        (false, Mode::SignUp) => "Criar conta",
    };
    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text(submit_label)
        .disabled_if(current.submitting)?
        .build();
    form_el.append_child(&submit)?;

    {
        let screen = screen.clone();
        let form = form.clone();
        let auth = auth.clone();
        on_submit(&form_el, move || submit_form(&screen, &form, &auth))?;
    }

    let toggle = {
        let screen = screen.clone();
        let form = form.clone();
        let auth = auth.clone();
        ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-link login-toggle")
            .text(if signing_up { "Já tem conta? Entrar" } else { "Não tem conta? Cadastre-se" })
            .on_click(move |_| {
                {
                    let mut f = form.borrow_mut();
                    if f.submitting {
                        return;
                    }
                    f.mode = if f.mode == Mode::SignIn { Mode::SignUp } else { Mode::SignIn };
                    f.error = None;
                    f.notice = None;
                }
                redraw(&screen, &form, &auth);
            })?
            .build()
    };

    let container = ElementBuilder::new("div")?
        .class("login-container")
        .child(header)?
        .child(form_el)?
        .child(toggle)?
        .build();

    replace_children(screen, &container)
}

fn submit_form(screen: &Element, form: &SharedForm, auth: &AppAuth) {
    let current = form.borrow().clone();
    if current.submitting {
        return;
    }

    let full_name = (current.mode == Mode::SignUp).then_some(current.full_name.as_str());
    if let Err(message) = validate_credentials(&current.email, &current.password, full_name) {
        form.borrow_mut().error = Some(message.to_string());
        redraw(screen, form, auth);
        return;
    }

    {
        let mut f = form.borrow_mut();
        f.submitting = true;
        f.error = None;
        f.notice = None;
    }
    redraw(screen, form, auth);

    let screen = screen.clone();
    let form = form.clone();
    let auth = auth.clone();
    spawn_local(async move {
        log::info!("🔐 [LOGIN] Enviando formulario ({:?})", current.mode);
        let result = match current.mode {
            Mode::SignIn => auth.sign_in(&current.email, &current.password).await.map(|_| None),
            Mode::SignUp => auth
                .sign_up(&current.email, &current.password, &current.full_name)
                .await
                .map(|outcome| {
                    (outcome == SignUpOutcome::ConfirmationPending)
                        .then(|| "Conta criada! Verifique seu e-mail para confirmar o cadastro.".to_string())
                }),
        };

        {
            let mut f = form.borrow_mut();
            f.submitting = false;
            match result {
                Ok(Some(notice)) => {
                    f.mode = Mode::SignIn;
                    f.password.clear();
                    f.notice = Some(notice);
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("❌ [LOGIN] {}", e);
                    f.error = Some(auth_error_message(&e));
                }
            }
        }
        redraw(&screen, &form, &auth);
    });
}

/// Label + input; `on_value` recibe el valor en cada tecla
fn text_field<F>(id: &str, label: &str, input_type: &str, value: &str, on_value: F) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("id", id)?
        .attr("name", id)?
        .attr("type", input_type)?
        .attr("value", value)?
        .build();
    on_input(&input, on_value)?;

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", id)?.text(label).build())?
        .child(input)?
        .build())
}
