use kardex_core::vitals::{classify, VitalSignKind, VitalStatus};

#[test]
fn systolic_bands() {
    assert_eq!(classify(120.0, VitalSignKind::TasSistolica), VitalStatus::Normal);
    assert_eq!(classify(90.0, VitalSignKind::TasSistolica), VitalStatus::Normal);
    assert_eq!(classify(140.0, VitalSignKind::TasSistolica), VitalStatus::Normal);
    assert_eq!(classify(85.0, VitalSignKind::TasSistolica), VitalStatus::Warning);
    assert_eq!(classify(150.0, VitalSignKind::TasSistolica), VitalStatus::Warning);
    assert_eq!(classify(79.0, VitalSignKind::TasSistolica), VitalStatus::Danger);
    assert_eq!(classify(161.0, VitalSignKind::TasSistolica), VitalStatus::Danger);
}

#[test]
fn diastolic_bands() {
    assert_eq!(classify(75.0, VitalSignKind::TadDiastolica), VitalStatus::Normal);
    assert_eq!(classify(55.0, VitalSignKind::TadDiastolica), VitalStatus::Warning);
    assert_eq!(classify(95.0, VitalSignKind::TadDiastolica), VitalStatus::Warning);
    assert_eq!(classify(45.0, VitalSignKind::TadDiastolica), VitalStatus::Danger);
    assert_eq!(classify(105.0, VitalSignKind::TadDiastolica), VitalStatus::Danger);
}

#[test]
fn heart_rate_bands() {
    assert_eq!(classify(70.0, VitalSignKind::Fc), VitalStatus::Normal);
    assert_eq!(classify(55.0, VitalSignKind::Fc), VitalStatus::Warning);
    assert_eq!(classify(110.0, VitalSignKind::Fc), VitalStatus::Warning);
    assert_eq!(classify(49.0, VitalSignKind::Fc), VitalStatus::Danger);
    assert_eq!(classify(130.0, VitalSignKind::Fc), VitalStatus::Danger);
}

#[test]
fn saturation_bands() {
    assert_eq!(classify(98.0, VitalSignKind::SatO2), VitalStatus::Normal);
    assert_eq!(classify(95.0, VitalSignKind::SatO2), VitalStatus::Normal);
    assert_eq!(classify(92.0, VitalSignKind::SatO2), VitalStatus::Warning);
    assert_eq!(classify(89.0, VitalSignKind::SatO2), VitalStatus::Danger);
}

#[test]
fn pain_score_bands() {
    // The EVA normal band covers the whole 0-10 scale; only out-of-scale
    // entries classify as warning or danger.
    assert_eq!(classify(0.0, VitalSignKind::Eva), VitalStatus::Normal);
    assert_eq!(classify(10.0, VitalSignKind::Eva), VitalStatus::Normal);
    assert_eq!(classify(-1.0, VitalSignKind::Eva), VitalStatus::Warning);
    assert_eq!(classify(11.0, VitalSignKind::Eva), VitalStatus::Danger);
}

#[test]
fn classification_is_total_over_absurd_input() {
    assert_eq!(classify(-40.0, VitalSignKind::Fc), VitalStatus::Danger);
    assert_eq!(classify(10_000.0, VitalSignKind::TasSistolica), VitalStatus::Danger);
    assert_eq!(classify(f64::NAN, VitalSignKind::Fc), VitalStatus::Warning);
}
