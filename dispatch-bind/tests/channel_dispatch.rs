//! Tests for feeding bound creators into an action channel

use dispatch_bind::prelude::*;
use tokio::sync::mpsc;

#[derive(Clone, Debug, PartialEq)]
enum Action {
    WeatherFetch { city: String },
    UnitsToggle,
}

#[test]
fn test_bound_map_feeds_channel() {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut creators: CreatorMap<Option<&'static str>, Action> = CreatorMap::new();
    creators.insert(
        "fetch",
        ActionCreator::new(|city: Option<&'static str>| Action::WeatherFetch {
            city: city.unwrap_or("Berlin").to_string(),
        }),
    );
    creators.insert("toggle", ActionCreator::new(|_| Action::UnitsToggle));

    let actions = bind_action_creator_map(&creators, channel_dispatch(tx));
    assert!(matches!(actions.call("fetch", Some("Oslo")), Some(Ok(()))));
    assert!(matches!(actions.call("toggle", None), Some(Ok(()))));
    assert!(matches!(actions.call("fetch", None), Some(Ok(()))));

    assert_eq!(
        rx.try_recv().unwrap(),
        Action::WeatherFetch {
            city: "Oslo".into()
        }
    );
    assert_eq!(rx.try_recv().unwrap(), Action::UnitsToggle);
    assert_eq!(
        rx.try_recv().unwrap(),
        Action::WeatherFetch {
            city: "Berlin".into()
        }
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_closed_receiver_surfaces_send_error() {
    let (tx, rx) = mpsc::unbounded_channel::<Action>();
    drop(rx);

    let toggle = ActionCreator::new(|()| Action::UnitsToggle);
    let bound = bind_action_creator(&toggle, channel_dispatch(tx));

    let err = bound.call(()).unwrap_err();
    assert_eq!(err.0, Action::UnitsToggle);
}
