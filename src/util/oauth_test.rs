use futures::executor::block_on;

use super::*;

struct StubProvider {
    outcome: Result<String, String>,
}

impl TokenProvider for StubProvider {
    async fn obtain_token(&self) -> Result<String, String> {
        self.outcome.clone()
    }
}

#[test]
fn session_code_can_consume_any_provider_impl() {
    let provider = StubProvider { outcome: Ok("ya29.stub".to_owned()) };
    assert_eq!(block_on(provider.obtain_token()), Ok("ya29.stub".to_owned()));

    let provider = StubProvider { outcome: Err("dismissed".to_owned()) };
    assert!(block_on(provider.obtain_token()).is_err());
}

#[test]
fn gis_provider_is_unavailable_off_browser() {
    // Without the hydrate feature the provider reports unavailability
    // instead of touching browser globals.
    #[cfg(not(feature = "hydrate"))]
    {
        let provider = GisTokenProvider::new("cid-1");
        assert!(block_on(provider.obtain_token()).is_err());
    }
}
