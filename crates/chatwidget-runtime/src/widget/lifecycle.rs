//! Startup sequence: wait for the document, build, fetch assets, go ready.

use tracing::{debug, info, warn};

use chatwidget_common::{Result, WidgetEvent};

use super::ChatWidget;

/// Where a widget is in its startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Host document still loading.
    WaitingForDocument,
    /// Creating the view.
    Building,
    /// View exists; theme fetch and avatar probe in flight.
    FetchingAssets,
    /// Both fetches settled and the final theme is applied.
    Ready,
}

impl ChatWidget {
    /// Drive the widget from embedding to ready.
    ///
    /// Only the first call does anything. Asset failures are logged and
    /// fall back; the only error is a host document that never becomes ready.
    pub async fn run(&self) -> Result<()> {
        if self.with_state(|s| std::mem::replace(&mut s.started, true)) {
            debug!(widget = %self.id, "run called again, ignored");
            return Ok(());
        }

        self.host.wait_ready().await?;

        self.set_phase(LifecyclePhase::Building);
        if self.with_state(|s| s.view.build(s.theme.theme()))? {
            self.events.publish(WidgetEvent::ViewBuilt);
        }

        self.set_phase(LifecyclePhase::FetchingAssets);
        tokio::join!(self.fetch_theme(), self.resolve_avatar());

        self.reapply_theme();
        self.set_phase(LifecyclePhase::Ready);
        info!(
            widget = %self.id,
            bot = %self.bot,
            avatar = %self.avatar_url(),
            "chat widget ready"
        );
        self.events.publish(WidgetEvent::Ready);
        Ok(())
    }

    /// Fetch the bot's theme once and merge it over the current one.
    ///
    /// Failures leave the theme as it was. When the view already exists the
    /// new theme is applied right away through [`WidgetEvent::ThemeUpdated`].
    pub async fn fetch_theme(&self) {
        if !self.with_state(|s| s.theme.begin_fetch()) {
            debug!(widget = %self.id, "theme fetch already done");
            return;
        }

        match self.backend.fetch_theme(&self.bot).await {
            Ok(record) => {
                let changed = self.with_state(|s| s.theme.merge(&record));
                debug!(widget = %self.id, ?changed, "theme record merged");
                self.emit(WidgetEvent::ThemeUpdated);
            }
            Err(e) => {
                warn!(widget = %self.id, bot = %self.bot, error = %e, "Theme fetch failed");
                self.with_state(|s| s.theme.mark_failed());
            }
        }
    }

    /// Probe for a custom avatar once; anything but success means default.
    pub async fn resolve_avatar(&self) {
        if !self.with_state(|s| s.avatar.begin_probe()) {
            debug!(widget = %self.id, "avatar probe already done");
            return;
        }

        let custom = match self.backend.probe_avatar(&self.bot).await {
            Ok(url) => {
                info!(widget = %self.id, url = %url, "Bot avatar loaded");
                self.with_state(|s| s.avatar.resolve_custom(url));
                true
            }
            Err(e) if e.is_transport() => {
                warn!(widget = %self.id, error = %e, "Failed to fetch avatar");
                self.with_state(|s| s.avatar.resolve_default());
                false
            }
            Err(e) => {
                info!(widget = %self.id, error = %e, "No custom avatar found, using default");
                self.with_state(|s| s.avatar.resolve_default());
                false
            }
        };

        self.events.publish(WidgetEvent::AvatarResolved {
            url: self.avatar_url(),
            custom,
        });
    }

    fn set_phase(&self, phase: LifecyclePhase) {
        self.with_state(|s| s.phase = phase);
        debug!(widget = %self.id, ?phase, "lifecycle phase");
    }
}
