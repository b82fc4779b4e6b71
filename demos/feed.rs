// Example: a blog feed host driving the engine with a synchronous scroll surface.
//
// Run with `RUST_LOG=windowed_list=trace cargo run --example feed --features tracing` to see
// the engine's trace output; without `RUST_LOG` only errors are printed.
use std::sync::{Arc, Mutex};

use tracing_subscriber::{EnvFilter, fmt};
use windowed_list::{ImmediateSurface, ScrollSource, WindowConfig, WindowedList};

#[derive(Debug)]
struct Post {
    title: String,
}

fn main() -> Result<(), windowed_list::WindowError> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let posts: Vec<Post> = (0..10_000)
        .map(|i| Post {
            title: format!("Post #{i}"),
        })
        .collect();

    let frame = Arc::new(Mutex::new(Vec::<String>::new()));
    let config = WindowConfig::new(72.0, 720.0).with_overscan(3);
    let mut feed = WindowedList::new(config, posts, ImmediateSurface::new(), {
        let frame = Arc::clone(&frame);
        move |post: &Post, index, top| {
            if let Ok(mut frame) = frame.lock() {
                frame.push(format!("{index:>5} @ {top:>8}: {}", post.title));
            }
        }
    })?
    .with_on_render(|window| {
        println!(
            "render {:?} of spacer {}px ({} entries)",
            window.range,
            window.total_extent,
            window.entries.len()
        );
    })
    .with_on_scroll(|event| {
        if event.source == ScrollSource::Programmatic {
            println!("landed at {} after a command", event.scroll_offset);
        }
    });

    feed.render();

    // User wheel, then the "back to top" button.
    for offset in [360.0, 7_200.0, 7_272.0] {
        feed.on_scroll(offset);
    }
    feed.scroll_to_index(5_000)?;
    feed.sync_from_surface();
    feed.scroll_to_bottom();
    feed.sync_from_surface();
    feed.scroll_to_top();
    feed.sync_from_surface();

    if let Ok(frame) = frame.lock() {
        println!("rendered {} rows, last: {:?}", frame.len(), frame.last());
    }
    Ok(())
}
