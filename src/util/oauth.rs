//! Google OAuth token acquisition behind a narrow provider seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session layer only needs "give me a provider access token"; the
//! Google Identity Services widget is reached through `js-sys` reflection so
//! nothing else in the crate depends on its globals.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

/// External OAuth capability: obtain a provider access token to forward to
/// the backend exchange endpoint.
#[allow(async_fn_in_trait)]
pub trait TokenProvider {
    async fn obtain_token(&self) -> Result<String, String>;
}

/// Token provider backed by the Google Identity Services script, configured
/// with the client id discovered from `auth/google/config/`.
#[derive(Clone, Debug)]
pub struct GisTokenProvider {
    client_id: String,
}

impl GisTokenProvider {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self { client_id: client_id.into() }
    }
}

impl TokenProvider for GisTokenProvider {
    async fn obtain_token(&self) -> Result<String, String> {
        #[cfg(feature = "hydrate")]
        {
            obtain_gis_token(&self.client_id).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err("not available on server".to_owned())
        }
    }
}

#[cfg(feature = "hydrate")]
async fn obtain_gis_token(client_id: &str) -> Result<String, String> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let not_loaded = || "Google sign-in is not available right now.".to_owned();

    let window = web_sys::window().ok_or_else(not_loaded)?;
    let mut oauth2 = wasm_bindgen::JsValue::from(window);
    for key in ["google", "accounts", "oauth2"] {
        oauth2 = js_sys::Reflect::get(&oauth2, &key.into()).map_err(|_| not_loaded())?;
        if oauth2.is_undefined() {
            return Err(not_loaded());
        }
    }
    let init: js_sys::Function = js_sys::Reflect::get(&oauth2, &"initTokenClient".into())
        .ok()
        .and_then(|value| value.dyn_into().ok())
        .ok_or_else(not_loaded)?;

    let (tx, rx) = futures::channel::oneshot::channel::<Result<String, String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let callback = Closure::<dyn FnMut(wasm_bindgen::JsValue)>::new({
        let tx = Rc::clone(&tx);
        move |response: wasm_bindgen::JsValue| {
            let token = js_sys::Reflect::get(&response, &"access_token".into())
                .ok()
                .and_then(|value| value.as_string());
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(token.ok_or_else(|| "No access token granted.".to_owned()));
            }
        }
    });

    let config = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&config, &"client_id".into(), &client_id.into());
    let _ = js_sys::Reflect::set(&config, &"scope".into(), &"openid email profile".into());
    let _ = js_sys::Reflect::set(&config, &"callback".into(), callback.as_ref());

    let client = init
        .call1(&oauth2, &config)
        .map_err(|_| "Failed to start Google sign-in.".to_owned())?;
    let request: js_sys::Function = js_sys::Reflect::get(&client, &"requestAccessToken".into())
        .ok()
        .and_then(|value| value.dyn_into().ok())
        .ok_or_else(|| "Failed to start Google sign-in.".to_owned())?;
    request.call0(&client).map_err(|_| "Google sign-in prompt failed.".to_owned())?;

    let result = rx.await.map_err(|_| "Google sign-in was dismissed.".to_owned())?;
    drop(callback);
    result
}
