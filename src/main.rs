use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use waypoint_config::WaypointConfig;
use waypoint_nav::{FilterBar, LayerId, LayerSelection, NavChrome, NavView, SimulatedPage};

const FRAME_MS: f32 = 16.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional config path as the first argument; otherwise ./waypoint.toml
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let mut config = WaypointConfig::load_from_file(&path)
                .with_context(|| format!("loading configuration from {path}"))?;
            config.merge_with_env();
            config
        }
        None => WaypointConfig::load(),
    };

    let chrome = Rc::new(RefCell::new(
        NavChrome::from_config(&config)
            .context("invalid section or layer configuration")?
            .with_admin_action(|| log::info!("admin: refresh requested")),
    ));
    let timing = chrome.borrow().settings().timing;
    let mut page = SimulatedPage::from_config(&config.page, &config.sections, timing);
    let _mount = NavChrome::mount(&chrome, page.events(), &page);

    let mut filters = FilterBar::new(vec!["Avery".into(), "Jordan".into(), "Sam".into()])
        .on_owner_change(|owner| log::info!("owner filter -> {owner}"))
        .on_deal_size_change(|size| log::info!("deal size filter -> {}", size.as_str()));
    filters.set_counts(48, 48);

    // Read down the page by wheel, then come back up a little.
    for _ in 0..12 {
        page.scroll_by(180.0);
    }
    report("after reading down", &chrome.borrow().view());
    page.scroll_by(-60.0);
    report("after scrolling up", &chrome.borrow().view());

    // Jump via the nav bar.
    for entry in &config.sections {
        chrome.borrow_mut().navigate_to(&entry.id, &mut page);
        let frames = page.settle(FRAME_MS);
        log::info!("navigated to {} in {} frames", entry.id, frames);
    }

    // Layer pills, then back to everything.
    chrome.borrow_mut().select_layer(LayerId::Gaps, &mut page);
    page.settle(FRAME_MS);
    report("gaps layer", &chrome.borrow().view());
    chrome.borrow_mut().select_layer(LayerSelection::All, &mut page);

    filters.select_owner("Jordan");
    filters.select_deal_size("enterprise");
    filters.set_counts(48, 7);
    log::info!("{}", filters.summary());

    // Narrow viewport switches to the compact bar.
    page.resize(800.0, config.page.viewport_height);
    if chrome.borrow_mut().trigger_admin_action() {
        log::info!("admin action dispatched");
    }

    let view = chrome.borrow().view();
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn report(step: &str, view: &NavView) {
    log::info!(
        "{step}: active={} progress={}% nav={:?} layer={:?}",
        view.active_section.as_deref().unwrap_or("-"),
        view.progress_percent,
        view.visibility,
        view.active_layer,
    );
}
