use crate::domain::AppState;
use crate::domain::auth::ManagerRoster;
use crate::infrastructure::auth::TokenAuthGate;
use crate::infrastructure::notify::PushNotifier;
use crate::infrastructure::persistence::PostgresStore;
use crate::infrastructure::realtime::RealtimeHub;
use crate::infrastructure::signature::Ed25519DecisionSigner;

pub mod auth;
pub mod http;
pub mod notify;
pub mod persistence;
pub mod realtime;
pub mod settings;
pub mod signature;

#[derive(Clone)]
pub struct AppStateImpl {
    store: PostgresStore,
    gate: TokenAuthGate,
    signer: Ed25519DecisionSigner,
    notifier: PushNotifier,
    hub: RealtimeHub,
    roster: ManagerRoster,
}

impl AppStateImpl {
    pub fn new(
        store: PostgresStore,
        gate: TokenAuthGate,
        signer: Ed25519DecisionSigner,
        notifier: PushNotifier,
        hub: RealtimeHub,
        roster: ManagerRoster,
    ) -> Self {
        Self {
            store,
            gate,
            signer,
            notifier,
            hub,
            roster,
        }
    }
}

impl AppState for AppStateImpl {
    type Articles = PostgresStore;
    type Videos = PostgresStore;
    type Shows = PostgresStore;
    type Authorizations = PostgresStore;
    type Agenda = PostgresStore;
    type Questions = PostgresStore;
    type Info = PostgresStore;
    type Gate = TokenAuthGate;
    type Signer = Ed25519DecisionSigner;
    type Notify = PushNotifier;
    type Events = RealtimeHub;

    fn articles(&self) -> &Self::Articles {
        &self.store
    }

    fn videos(&self) -> &Self::Videos {
        &self.store
    }

    fn shows(&self) -> &Self::Shows {
        &self.store
    }

    fn authorizations(&self) -> &Self::Authorizations {
        &self.store
    }

    fn agenda(&self) -> &Self::Agenda {
        &self.store
    }

    fn questions(&self) -> &Self::Questions {
        &self.store
    }

    fn info(&self) -> &Self::Info {
        &self.store
    }

    fn gate(&self) -> &Self::Gate {
        &self.gate
    }

    fn signer(&self) -> &Self::Signer {
        &self.signer
    }

    fn notifier(&self) -> &Self::Notify {
        &self.notifier
    }

    fn events(&self) -> &Self::Events {
        &self.hub
    }

    fn roster(&self) -> &ManagerRoster {
        &self.roster
    }
}
