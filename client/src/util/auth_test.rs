use super::*;
use crate::config::ApiConfig;
use crate::net::unauthorized::UnauthorizedEvent;

#[test]
fn listener_mirrors_unauthorized_until_cleanup() {
    let client = ApiClient::browser(ApiConfig::default());
    let owner = Owner::new();
    let auth = owner.with(|| {
        let auth = RwSignal::new(AuthState { has_token: true, unauthorized_status: None });
        install_unauthorized_listener(&client, auth);
        auth
    });
    assert_eq!(client.unauthorized().subscriber_count(), 1);

    client.unauthorized().notify(UnauthorizedEvent { status: 401 });
    let state = auth.get_untracked();
    assert!(!state.has_token);
    assert_eq!(state.unauthorized_status, Some(401));

    owner.cleanup();
    assert_eq!(client.unauthorized().subscriber_count(), 0);
}
