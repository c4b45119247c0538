use gpui::prelude::*;
use gpui::*;
use rand::Rng;
use synced_charts::{Chart, ChartConfig, ChartContainer, ChartState};

const SAMPLES: usize = 500;

struct DemoApp {
    container: Entity<ChartContainer>,
}

impl DemoApp {
    pub fn new(state: ChartState, cx: &mut Context<Self>) -> Self {
        let chart = cx.new(|_| Chart::new(state));
        let container = cx.new(|cx| ChartContainer::new(chart, cx));
        Self { container }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div().size_full().child(self.container.clone())
    }
}

/// Noisy sine and a random walk, same length.
fn synthetic_series() -> (Vec<f64>, Vec<f64>) {
    let mut rng = rand::rng();
    let sine = (0..SAMPLES)
        .map(|i| (i as f64 * 0.05).sin() * 50.0 + 100.0 + rng.random_range(-5.0..5.0))
        .collect();

    let mut level: f64 = 100.0;
    let walk = (0..SAMPLES)
        .map(|_| {
            level += rng.random_range(-2.0..2.0);
            level
        })
        .collect();
    (sine, walk)
}

fn main() {
    let (series1, series2) = synthetic_series();
    let state = ChartState::new(series1, series2, ChartConfig::default())
        .expect("synthetic series are valid");

    Application::new().run(move |cx: &mut App| {
        synced_charts::init(cx);

        cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| DemoApp::new(state, cx))
        })
        .expect("failed to open window");
    });
}
