mod assets;
mod config;
#[cfg(feature = "keyboard-nav")]
mod keybindings;
mod services;
mod state;
mod stories;
mod workspace;

use anyhow::Context as _;
use gpui::*;
use gpui_component::Root;
use tracing_subscriber::EnvFilter;

use crate::assets::Assets;
use crate::config::StoryConfig;
use crate::state::StoryState;
use crate::workspace::StoryBrowser;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cloud_storage_story=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let config = StoryConfig::load();
    let app = Application::new().with_assets(Assets);

    app.run(move |cx| {
        gpui_component::init(cx);
        #[cfg(feature = "keyboard-nav")]
        keybindings::init(cx);

        let bounds = Bounds::centered(
            None,
            size(px(config.window_width), px(config.window_height)),
            cx,
        );
        StoryState::init(config, cx);

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        title: Some("Cloud Storage Stories".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |window, cx| {
                    let browser = StoryBrowser::view(window, cx);
                    cx.new(|cx| Root::new(AnyView::from(browser), window, cx))
                },
            )
            .context("Failed to open story window")?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();

        cx.activate(true);
    });
}
