use super::*;

#[test]
fn cta_labels_are_distinct() {
    let mut labels = vec![CTA_NAVBAR, CTA_LOGIN, CTA_HERO_PRIMARY, CTA_HERO_SECONDARY, CTA_FINAL, CTA_FINAL_FREE];
    labels.extend(PLANS.iter().map(|p| p.name));
    let total = labels.len();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), total);
    assert!(!labels.contains(&crate::state::capture::DEFAULT_PLAN_INTEREST));
}

#[test]
fn plans_are_the_three_tiers_in_price_order() {
    let names: Vec<&str> = PLANS.iter().map(|p| p.name).collect();
    assert_eq!(names, ["Starter Ads", "Smart Ads + IA", "Performance Pro"]);
    let prices: Vec<&str> = PLANS.iter().map(|p| p.price).collect();
    assert_eq!(prices, ["$199", "$499", "$999"]);
}

#[test]
fn only_smart_ads_is_highlighted() {
    let highlighted: Vec<&str> = PLANS.iter().filter(|p| p.is_highlighted()).map(|p| p.name).collect();
    assert_eq!(highlighted, ["Smart Ads + IA"]);
}

#[test]
fn nav_links_point_at_section_anchors() {
    let hrefs: Vec<&str> = NAV_LINKS.iter().map(|l| l.href).collect();
    assert_eq!(hrefs, ["#how-it-works", "#benefits", "#pricing"]);
}

#[test]
fn steps_are_numbered_in_order() {
    let nums: Vec<&str> = STEPS.iter().map(|s| s.num).collect();
    assert_eq!(nums, ["01", "02", "03"]);
}
