use super::*;

#[test]
fn paths_round_trip() {
    for route in [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Movies,
    ] {
        assert_eq!(AppRoute::from_path(route.to_path()), route);
    }
}

#[test]
fn unknown_paths_resolve_to_not_found() {
    assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/movies/123"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
}

#[test]
fn only_movies_requires_auth() {
    assert!(AppRoute::Movies.requires_auth());
    assert!(!AppRoute::Home.requires_auth());
    assert!(!AppRoute::Login.requires_auth());
    assert!(!AppRoute::Register.requires_auth());
    assert!(!AppRoute::NotFound.requires_auth());
}

#[test]
fn auth_pages_redirect_when_authenticated() {
    assert!(AppRoute::Login.should_redirect_when_authenticated());
    assert!(AppRoute::Register.should_redirect_when_authenticated());
    assert!(!AppRoute::Home.should_redirect_when_authenticated());
    assert!(!AppRoute::Movies.should_redirect_when_authenticated());
}

#[test]
fn redirect_targets() {
    assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
    assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Movies);
}

#[test]
fn display_matches_path() {
    assert_eq!(AppRoute::Movies.to_string(), "/movies");
    assert_eq!(AppRoute::default(), AppRoute::Home);
}
