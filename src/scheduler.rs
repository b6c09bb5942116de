use std::time::Duration;

use color_eyre::Result;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::info;

use crate::action::Action;
use crate::app::App;
use crate::config::GeneralConfig;
use crate::event::InputSource;
use crate::system::counters::CounterSource;
use crate::system::kill::ProcessController;
use crate::ui::Presenter;

/// Drive the monitor until the operator quits.
///
/// Each tick samples, renders, then checks for exactly one pending key.
/// The PID prompt and the pause that follows a kill both happen outside
/// the timed interval, which restarts once they are done.
pub async fn run<S, C, P, I>(
    app: &mut App<S, C>,
    presenter: &mut P,
    input: &mut I,
    config: &GeneralConfig,
) -> Result<()>
where
    S: CounterSource,
    C: ProcessController,
    P: Presenter,
    I: InputSource,
{
    let period = Duration::from_millis(config.refresh_rate_ms.max(1));
    let kill_pause = Duration::from_millis(config.kill_message_ms);
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while app.is_running() {
        ticker.tick().await;

        app.refresh_data();
        presenter.render(&app.view())?;

        let Some(key) = input.poll_key() else {
            continue;
        };
        match app.map_key(key) {
            Action::PromptKill => {
                app.dispatch(Action::PromptKill);
                let line = input
                    .read_line(&mut |typed: &str| {
                        app.set_prompt_text(typed);
                        presenter.render(&app.view())
                    })
                    .await?;
                let reported = app.submit_prompt(line);
                presenter.render(&app.view())?;
                if reported {
                    tokio::time::sleep(kill_pause).await;
                }
                ticker.reset();
            }
            Action::Quit => {
                info!("quit requested");
                app.dispatch(Action::Quit);
            }
            action => app.dispatch(action),
        }
    }

    Ok(())
}
