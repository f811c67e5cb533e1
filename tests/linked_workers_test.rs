// ==========================================
// 绑定同工补排集成测试
// ==========================================
// 测试范围: 单日排完后，已排同工的绑定夥伴补进同一天的空位
// ==========================================

mod helpers;

use helpers::test_data_builder::*;
use service_roster::domain::{Schedule, ServiceItem};
use service_roster::engine::generate_roster;

const VOCALS: &str = "唱詩";
const WORSHIP: &str = "敬拜";
const USHER: &str = "招待";

// ==========================================
// 基本补排
// ==========================================

#[test]
fn test_linked_key_worker_fills_open_seat() {
    // 轮流每日只排一位主要同工，第二个座位留给绑定夥伴
    let input = InputBuilder::new()
        .worker(WorkerBuilder::new("k1").serves(&[VOCALS]).linked(&["k2"]))
        .worker(WorkerBuilder::new("k2").serves(&[VOCALS]))
        .item(ServiceItem::multiple("vocals", VOCALS, 2))
        .key_workers(VOCALS, &["k1", "k2"])
        .build();

    let result = generate_roster(&sundays(2), &input);

    assert_eq!(result.schedules[0].multiple("vocals"), vec!["k1", "k2"]);
    // 第二週轮到 k2，k2 没有绑定 k1
    assert_eq!(result.schedules[1].multiple("vocals"), vec!["k2"]);
    assert_eq!(result.service_counts.get("k2"), Some(&2));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_linked_worker_placed_in_first_qualified_role_with_room() {
    let input = InputBuilder::new()
        .worker(WorkerBuilder::new("k1").serves(&[VOCALS]).linked(&["p"]))
        .worker(WorkerBuilder::new("p").serves(&[USHER, VOCALS]))
        .worker(WorkerBuilder::new("u").serves(&[USHER]))
        .item(ServiceItem::single("usher", USHER))
        .item(ServiceItem::multiple("vocals", VOCALS, 2))
        .key_workers(VOCALS, &["k1", "p"])
        .key_workers(USHER, &["u"])
        .build();

    let result = generate_roster(&sundays(1), &input);
    let schedule = &result.schedules[0];

    // 招待已满，放进唱詩
    assert_eq!(schedule.single("usher"), Some("u"));
    assert_eq!(schedule.multiple("vocals"), vec!["k1", "p"]);
}

#[test]
fn test_existing_assignment_acts_as_anchor() {
    let dates = sundays(1);
    let input = InputBuilder::new()
        .worker(WorkerBuilder::new("a").serves(&[WORSHIP]).linked(&["k2"]))
        .worker(WorkerBuilder::new("k1").serves(&[VOCALS]))
        .worker(WorkerBuilder::new("k2").serves(&[VOCALS]))
        .item(ServiceItem::single("worship", WORSHIP))
        .item(ServiceItem::multiple("vocals", VOCALS, 2))
        .key_workers(VOCALS, &["k1", "k2"])
        .existing(Schedule::new(dates[0]).with_single("worship", "a"))
        .build();

    let result = generate_roster(&dates, &input);

    assert_eq!(result.schedules[0].single("worship"), Some("a"));
    assert_eq!(result.schedules[0].multiple("vocals"), vec!["k1", "k2"]);
}

// ==========================================
// 略过条件
// ==========================================

#[test]
fn test_unavailable_partner_is_skipped() {
    let dates = sundays(1);
    let input = InputBuilder::new()
        .worker(WorkerBuilder::new("k1").serves(&[VOCALS]).linked(&["away", "capped"]))
        .worker(WorkerBuilder::new("away").serves(&[VOCALS]).unavailable(dates[0]))
        .worker(WorkerBuilder::new("capped").serves(&[VOCALS]).max(0))
        .worker(WorkerBuilder::new("k2").serves(&[VOCALS]))
        .item(ServiceItem::multiple("vocals", VOCALS, 3))
        .key_workers(VOCALS, &["k1", "k2"])
        .build();

    let result = generate_roster(&dates, &input);

    // max 0 视为未设定 → capped 在一般排班中已被排入
    let vocals = result.schedules[0].multiple("vocals");
    assert!(!vocals.contains(&"away"));
    assert_eq!(vocals, vec!["k1", "capped"]);
}

#[test]
fn test_partner_at_ceiling_is_not_added() {
    let before_quarter = chrono::NaiveDate::from_ymd_opt(2024, 12, 29).unwrap();
    let input = InputBuilder::new()
        .worker(WorkerBuilder::new("k1").serves(&[VOCALS]).linked(&["k2"]))
        .worker(WorkerBuilder::new("k2").serves(&[VOCALS]).max(1))
        .item(ServiceItem::multiple("vocals", VOCALS, 2))
        .key_workers(VOCALS, &["k1", "k2"])
        .existing(Schedule::new(before_quarter).with_multiple("vocals", &["k2"]))
        .build();

    let result = generate_roster(&sundays(1), &input);

    assert_eq!(result.schedules[0].multiple("vocals"), vec!["k1"]);
    assert!(result.warnings.is_empty(), "skipping a partner is silent");
}

#[test]
fn test_no_open_slot_is_silent() {
    let input = InputBuilder::new()
        .worker(WorkerBuilder::new("a").serves(&[WORSHIP]).linked(&["b"]))
        .worker(WorkerBuilder::new("b").serves(&[USHER]))
        .worker(WorkerBuilder::new("c").serves(&[USHER]))
        .item(ServiceItem::single("worship", WORSHIP))
        .item(ServiceItem::single("usher", USHER))
        .key_workers(USHER, &["c"])
        .build();

    let result = generate_roster(&sundays(1), &input);
    let schedule = &result.schedules[0];

    assert_eq!(schedule.single("worship"), Some("a"));
    assert_eq!(schedule.single("usher"), Some("c"));
    assert!(!schedule.all_names().contains(&"b"));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_unknown_linked_id_is_ignored() {
    let input = InputBuilder::new()
        .worker(WorkerBuilder::new("k1").serves(&[VOCALS]).linked(&["ghost"]))
        .item(ServiceItem::multiple("vocals", VOCALS, 2))
        .key_workers(VOCALS, &["k1"])
        .build();

    let result = generate_roster(&sundays(1), &input);

    assert_eq!(result.schedules[0].multiple("vocals"), vec!["k1"]);
}

#[test]
fn test_placements_do_not_cascade() {
    // k2 是补排进来的，不再连带补排 k3
    let input = InputBuilder::new()
        .worker(WorkerBuilder::new("k1").serves(&[VOCALS]).linked(&["k2"]))
        .worker(WorkerBuilder::new("k2").serves(&[VOCALS]).linked(&["k3"]))
        .worker(WorkerBuilder::new("k3").serves(&[VOCALS]))
        .item(ServiceItem::multiple("vocals", VOCALS, 3))
        .key_workers(VOCALS, &["k1", "k2", "k3"])
        .build();

    let result = generate_roster(&sundays(1), &input);

    assert_eq!(result.schedules[0].multiple("vocals"), vec!["k1", "k2"]);
}
