//! The hosting element of the menu: owns immutable snapshots of the three
//! reactive inputs (entity, capabilities, live flags), re-resolves the
//! action list whenever one of them changes, and routes action effects to
//! the outside world. Resolution itself never suspends; the only async
//! work here is the share flow, whose task this sheet owns and aborts on
//! teardown.

pub mod ports;
mod share;

pub use ports::{Mutation, Navigator, Notice, PlayerPort, ShareSink, SheetPorts, ShareUrlProvider};

use tokio::task::JoinHandle;

use crate::action::{Action, Effect};
use crate::capability::CapabilitySet;
use crate::error::MenuError;
use crate::model::MediaEntity;
use crate::resolver::{resolve, ResolverContext};

pub struct MenuSheet {
    plugin_id: String,
    plugin_name: String,
    entity: MediaEntity,
    capabilities: Option<CapabilitySet>,
    context: ResolverContext,
    actions: Vec<Action>,
    ports: SheetPorts,
    share_task: Option<JoinHandle<()>>,
}

impl MenuSheet {
    pub fn new(
        plugin_id: &str,
        plugin_name: &str,
        entity: MediaEntity,
        loaded: bool,
        from_player: bool,
        ports: SheetPorts,
    ) -> Self {
        let context = ResolverContext {
            loaded,
            from_player,
            queue_size: 0,
            saved_to_library: false,
        };
        let mut sheet = Self {
            plugin_id: plugin_id.to_string(),
            plugin_name: plugin_name.to_string(),
            entity,
            capabilities: None,
            context,
            actions: Vec::new(),
            ports,
            share_task: None,
        };
        sheet.recompute();
        sheet
    }

    /// The current ordered action list.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Swap in a fresh entity snapshot, e.g. after the full load finishes
    /// or after a flag flip was observed.
    pub fn set_entity(&mut self, entity: MediaEntity, loaded: bool) {
        self.entity = entity;
        self.context.loaded = loaded;
        self.recompute();
    }

    /// Capability set of the active plugin; `None` means no plugin is
    /// connected, which gates exactly like an empty set.
    pub fn set_capabilities(&mut self, capabilities: Option<CapabilitySet>) {
        self.capabilities = capabilities;
        self.recompute();
    }

    pub fn set_saved(&mut self, saved_to_library: bool) {
        self.context.saved_to_library = saved_to_library;
        self.recompute();
    }

    pub fn set_queue_size(&mut self, queue_size: usize) {
        self.context.queue_size = queue_size;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.actions = resolve(&self.entity, self.capabilities.as_ref(), &self.context);
    }

    /// Interpret one resolved action. Toggle and deletion requests go out
    /// fire-and-forget on the mutation channel; the sheet never updates
    /// its own snapshot optimistically, the flipped value arrives back via
    /// [`set_entity`](Self::set_entity) / [`set_saved`](Self::set_saved).
    pub fn dispatch(&mut self, action: &Action) -> Result<(), MenuError> {
        match &action.effect {
            Effect::Play => {
                self.ports
                    .player
                    .play(&self.plugin_id, &self.entity, self.context.loaded);
                Ok(())
            }
            Effect::AddToNext => {
                self.ports
                    .player
                    .add_to_next(&self.plugin_id, &self.entity, self.context.loaded);
                Ok(())
            }
            Effect::AddToQueue => {
                self.ports
                    .player
                    .add_to_queue(&self.plugin_id, &self.entity, self.context.loaded);
                Ok(())
            }
            Effect::OpenPanel(panel) => {
                self.ports.player.open_panel(*panel);
                Ok(())
            }
            Effect::StartRadio => {
                self.ports.player.start_radio(&self.plugin_id, &self.entity);
                Ok(())
            }
            Effect::SetLiked(liked) => self.send_mutation(Mutation::Like {
                track_id: self.entity.id().to_string(),
                liked: *liked,
            }),
            Effect::SetHidden(hidden) => self.send_mutation(Mutation::Hide {
                track_id: self.entity.id().to_string(),
                hidden: *hidden,
            }),
            Effect::SetFollowing(following) => self.send_mutation(Mutation::Follow {
                artist_id: self.entity.id().to_string(),
                following: *following,
            }),
            Effect::SetSaved(saved) => self.send_mutation(Mutation::Save {
                entity_id: self.entity.id().to_string(),
                saved: *saved,
            }),
            Effect::DeletePlaylist => self.send_mutation(Mutation::DeletePlaylist {
                playlist_id: self.entity.id().to_string(),
            }),
            Effect::SaveToPlaylist | Effect::Download => Err(MenuError::NotYetAvailable),
            Effect::OpenEntity(target) => {
                self.ports.navigator.open(&self.plugin_id, target);
                self.ports.player.collapse();
                Ok(())
            }
            Effect::Share => self.start_share(),
        }
    }

    fn send_mutation(&self, mutation: Mutation) -> Result<(), MenuError> {
        tracing::debug!(plugin = %self.plugin_id, ?mutation, "Dispatching mutation");
        self.ports
            .mutations
            .send(mutation)
            .map_err(|_| MenuError::MutationChannelClosed)
    }

    fn start_share(&mut self) -> Result<(), MenuError> {
        let provider = self
            .ports
            .share_provider
            .clone()
            .ok_or(MenuError::ShareUnavailable)?;
        // A newer share supersedes an older in-flight fetch.
        if let Some(task) = self.share_task.take() {
            task.abort();
        }
        self.share_task = Some(share::spawn_share(
            provider,
            self.ports.share_sink.clone(),
            self.ports.notices.clone(),
            self.plugin_name.clone(),
            self.entity.clone(),
        ));
        Ok(())
    }

    /// Tear down the sheet: an in-flight share fetch must not reach the
    /// platform chooser once the sheet is gone.
    pub fn dismiss(&mut self) {
        if let Some(task) = self.share_task.take() {
            task.abort();
        }
    }
}

impl Drop for MenuSheet {
    fn drop(&mut self) {
        self.dismiss();
    }
}
