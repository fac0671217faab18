use super::*;
use proptest::prelude::*;

#[test]
fn test_amount_rejects_negative_and_non_finite() {
    assert_eq!(Amount::new(-1.0), Err(AmountError::Negative(-1.0)));
    assert!(matches!(Amount::new(f64::NAN), Err(AmountError::NotFinite(_))));
    assert!(matches!(
        Amount::new(f64::INFINITY),
        Err(AmountError::NotFinite(_))
    ));
    assert_eq!(Amount::new(0.0).unwrap(), Amount::ZERO);
    assert_eq!(Amount::new(40.0).unwrap().get(), 40.0);
}

#[test]
fn test_amount_deserialize_validates() {
    let amount: Amount = serde_json::from_str("30").unwrap();
    assert_eq!(amount.get(), 30.0);
    assert!(serde_json::from_str::<Amount>("-5").is_err());
}

#[test]
fn test_recharge_denominations_are_valid_amounts() {
    for value in RECHARGE_DENOMINATIONS {
        assert!(Amount::new(value).is_ok());
    }
    assert!(RECHARGE_DENOMINATIONS.contains(&QUICK_RECHARGE));
}

#[test]
fn test_new_session_starts_waiting() {
    let session = Session::new(0.0);
    assert_eq!(session.balance, 0.0);
    assert!(session.history.is_empty());
    assert!(session.error.is_none());
    assert_eq!(session.current.status, GambleStatus::Waiting);
    assert_eq!(session.current.level, 0);
    assert_eq!(session.current.payoff, 0.0);
    assert_eq!(session.current.bet, 0.0);
    assert_eq!(session.current.probability, DEFAULT_PROBABILITY);
}

#[test]
fn test_waiting_gamble_seeded_from_config() {
    let config = Configuration {
        default_bet: 25.0,
        default_probability: 0.8,
        stop_on_max_level: true,
    };
    let gamble = Gamble::waiting(&config);
    assert_eq!(gamble.bet, 25.0);
    assert_eq!(gamble.probability, 0.8);
    assert!(gamble.is_waiting());
    assert!(!gamble.status.is_closed());
}

#[test]
fn test_expected_payoff_doubles_per_level() {
    let mut gamble = Gamble::waiting(&Configuration {
        default_bet: 10.0,
        ..Configuration::default()
    });
    assert_eq!(gamble.expected_payoff(), 0.0);
    gamble.level = 1;
    assert_eq!(gamble.expected_payoff(), 10.0);
    gamble.level = 2;
    assert_eq!(gamble.expected_payoff(), 20.0);
    gamble.level = TOP_LEVEL;
    assert_eq!(gamble.expected_payoff(), 2560.0);
    assert!(gamble.at_top());
}

#[test]
fn test_expected_payoff_beyond_ladder() {
    let gamble = Gamble {
        level: u8::MAX,
        ..Gamble::waiting(&Configuration {
            default_bet: 1.0,
            ..Configuration::default()
        })
    };
    assert_eq!(gamble.expected_payoff(), 2f64.powi(254));
    assert!(!gamble.at_top());

    let gamble = Gamble { level: 33, ..gamble };
    assert_eq!(gamble.expected_payoff(), 2f64.powi(32));
}

#[test]
fn test_history_tallies() {
    let mut session = Session::new(100.0);
    let won = Gamble {
        bet: 10.0,
        level: 3,
        status: GambleStatus::Won,
        payoff: 40.0,
        probability: 0.5,
    };
    let lost = Gamble {
        bet: 10.0,
        level: 2,
        status: GambleStatus::Lost,
        payoff: 0.0,
        probability: 0.5,
    };
    session.history = vec![won, lost];
    assert_eq!(session.wins(), 1);
    assert_eq!(session.losses(), 1);
    assert_eq!(session.net_result(), 20.0);
}

#[test]
fn test_status_serializes_screaming_case() {
    let encoded = serde_json::to_string(&GambleStatus::InProgress).unwrap();
    assert_eq!(encoded, "\"IN_PROGRESS\"");
    let encoded = serde_json::to_string(&ProgressionError::BetNotSet).unwrap();
    assert_eq!(encoded, "\"BET_NOT_SET\"");
}

proptest! {
    #[test]
    fn prop_amount_accepts_non_negative_finite(value in 0.0f64..1e12) {
        let amount = Amount::new(value).unwrap();
        prop_assert_eq!(amount.get(), value);
    }

    #[test]
    fn prop_amount_rejects_negative(value in -1e12f64..-1e-9) {
        prop_assert!(Amount::new(value).is_err());
    }
}
