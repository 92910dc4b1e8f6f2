use super::*;

#[test]
fn roadmap_starts_with_account_setup_done() {
    let steps = roadmap();
    assert_eq!(steps.len(), 8);
    assert!(steps[0].completed);
    assert!(steps.iter().skip(1).all(|step| !step.completed));
    assert!(steps.iter().all(|step| !step.locked));
}

#[test]
fn routed_steps_point_at_real_pages() {
    let steps = roadmap();
    let routed: Vec<_> = steps.iter().filter_map(|step| step.route).collect();
    assert_eq!(routed, vec![routes::RESUME_BUILDER, routes::CODE_EDITOR]);
}

#[test]
fn completion_percent_counts_done_steps() {
    let steps = roadmap();
    assert_eq!(completion_percent(&steps), 12.5);
    assert_eq!(completion_percent(&[]), 0.0);

    let mut steps = roadmap();
    for step in &mut steps {
        step.completed = true;
    }
    assert_eq!(completion_percent(&steps), 100.0);
}
