//! Drives a carousel without a renderer: a manual clock stands in for frame
//! time and every published state is logged. Run with `RUST_LOG=debug`.

use std::rc::Rc;

use glide_carousel::{Carousel, CarouselConfig, CarouselState};
use glide_core::{ManualClock, PointerEvent, PointerId, Size};
use web_time::{Duration, Instant};

const CONFIG: &str = r#"{
    "infinite": true,
    "showDots": true,
    "showNav": true,
    "autoplay": true,
    "speed": 300,
    "autoplayDuration": 1500,
    "slidesPerView": 1,
    "spaceBetween": 16
}"#;

fn describe(st: &CarouselState) -> String {
    format!(
        "index={} offset={:.1}px duration={}ms",
        st.current_index, st.offset, st.transition_duration_ms
    )
}

fn dots(carousel: &Carousel<&str>) -> String {
    carousel
        .dots()
        .iter()
        .map(|d| if d.active { '●' } else { '○' })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = CarouselConfig::from_json(CONFIG)?;
    let clock = ManualClock::new(Instant::now());
    let carousel = Carousel::with_clock(
        ["sunrise", "harbour", "market", "ridge", "lighthouse"],
        config,
        Rc::new(clock.clone()),
    )?;
    carousel
        .state_signal()
        .subscribe(|st| log::info!("render: {}", describe(st)));

    carousel.measure_viewport(Size::new(640.0, 360.0));
    log::info!("strip: {}", carousel.with_slides(|s| s.to_string()));

    // Autoplay for a few intervals; the renderer reports each animation end.
    for _ in 0..3 {
        clock.advance(Duration::from_millis(1500));
        carousel.tick();
        clock.advance(Duration::from_millis(300));
        carousel.on_transition_end();
        log::info!("dots: {}", dots(&carousel));
    }

    // Drag right from the fourth slide back to the third.
    let finger = PointerId(1);
    carousel.on_pointer(&PointerEvent::down(finger, 200.0, 180.0));
    carousel.on_pointer(&PointerEvent::moved(finger, 260.0, 182.0));
    carousel.on_pointer(&PointerEvent::up(finger, 260.0, 182.0));
    carousel.on_transition_end();

    // Dot click on the first slide travels forward through the trailing clone.
    carousel.go_to_index(0);
    carousel.on_transition_end();
    log::info!("dots: {}", dots(&carousel));

    // Nav arrow back across the start.
    if carousel.shows_nav() {
        carousel.go_previous();
        carousel.on_transition_end();
    }

    println!("{}", describe(&carousel.state()));
    carousel.unmount();
    Ok(())
}
