use crate::aggregate;
use crate::errors::{Result, SyncError};
use crate::fetch::{FetchCommand, FetchOutcome, FetchPayload, Generations};
use crate::kind::DataKind;
use crate::live::{LiveState, PushEffect};
use crate::pagination::{PageDirection, Paginator};
use crate::scope::{AccountId, ScopeKey};
use crate::staleness::is_stale;
use crate::store::{CacheEntry, CacheStore, KindData};
use crate::view::{DisplayData, RenderSignal, ViewData};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use transport::models::{Account, AccountSummary};
use transport::PushFrame;

pub type RenderCallback = Arc<dyn Fn(RenderSignal) + Send + Sync>;

/// A page past the first, held only for display. Never written to the cache
/// store and dropped on the next activation.
struct TransientPage {
    kind: DataKind,
    scope: ScopeKey,
    page: usize,
    data: KindData,
    has_more: bool,
    last_cursor: Option<String>,
}

/// Collects the per-account legs of an all-accounts orders/bills fan-out
/// until every account has answered.
struct FanoutState {
    generation: u64,
    expected: usize,
    results: HashMap<AccountId, std::result::Result<FetchPayload, String>>,
}

/// The scope transition controller. Owns every piece of client-local state
/// and is driven purely by events: activations, pagination requests, push
/// frames and completed pulls. It performs no IO itself; pulls it wants are
/// returned as `FetchCommand`s for the caller to execute.
pub struct SyncEngine {
    ttl_millis: u64,
    accounts: Vec<Account>,
    store: CacheStore,
    paginator: Paginator,
    live: LiveState,
    generations: Generations,
    active: Option<(DataKind, ScopeKey)>,
    transient: Option<TransientPage>,
    fanouts: HashMap<DataKind, FanoutState>,
    degraded: HashSet<(DataKind, ScopeKey)>,
    partial: HashSet<(DataKind, ScopeKey)>,
    render_cb: Option<RenderCallback>,
}

impl SyncEngine {
    pub fn new(ttl_millis: u64) -> Self {
        SyncEngine {
            ttl_millis,
            accounts: Vec::new(),
            store: CacheStore::new(),
            paginator: Paginator::new(),
            live: LiveState::new(),
            generations: Generations::new(),
            active: None,
            transient: None,
            fanouts: HashMap::new(),
            degraded: HashSet::new(),
            partial: HashSet::new(),
            render_cb: None,
        }
    }

    pub fn register_render_callback(&mut self, cb: RenderCallback) {
        self.render_cb = Some(cb);
    }

    /// Replace the account roster wholesale.
    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Seed live state from the startup bulk summary.
    pub fn hydrate(&mut self, summaries: &[AccountSummary], now: u64) {
        self.live.hydrate_summary(summaries, now);
    }

    pub fn active(&self) -> Option<&(DataKind, ScopeKey)> {
        self.active.as_ref()
    }

    fn signal(&self, signal: RenderSignal) {
        if let Some(cb) = &self.render_cb {
            cb(signal);
        }
    }

    fn signal_refresh(&self, kind: DataKind, scope: &ScopeKey) {
        self.signal(RenderSignal::Refresh {
            kind,
            scope: scope.clone(),
        });
    }

    fn account_name(&self, account_id: &str) -> String {
        self.accounts
            .iter()
            .find(|a| a.id == account_id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| account_id.to_string())
    }

    /// Freshness of one (kind, account) pair: a fresh page-1 cache entry, a
    /// fresh live snapshot, or for pending orders a fresh activity stamp.
    fn account_fresh(&self, kind: DataKind, account_id: &str, now: u64) -> bool {
        let scope = ScopeKey::Account(account_id.to_string());
        if !self.store.is_stale(kind, &scope, now, self.ttl_millis) {
            return true;
        }
        let live_ts = match kind {
            DataKind::Balance => self.live.balance(account_id).map(|s| s.updated_at),
            DataKind::Positions => self.live.positions(account_id).map(|s| s.updated_at),
            DataKind::PendingOrders => {
                let snap = self.live.pending_orders(account_id).map(|s| s.updated_at);
                let touch = self.live.pending_touched_at(&scope);
                snap.max(touch)
            }
            _ => None,
        };
        !is_stale(live_ts, now, self.ttl_millis)
    }

    /// Freshness of the all-accounts view of a push-capable kind. Pending
    /// orders carry an aggregate activity stamp so a recent live update
    /// answers without enumerating every account.
    fn all_push_fresh(&self, kind: DataKind, now: u64) -> bool {
        if kind == DataKind::PendingOrders
            && !is_stale(self.live.pending_touched_at(&ScopeKey::All), now, self.ttl_millis)
        {
            return true;
        }
        self.accounts
            .iter()
            .all(|a| self.account_fresh(kind, &a.id, now))
    }

    /// Resolve the scope a kind is actually served under. Kinds undefined
    /// for the all-accounts scope narrow to the first roster account.
    fn resolve_scope(&self, kind: DataKind, scope: ScopeKey) -> Result<ScopeKey> {
        if scope.is_all() && !kind.supports_all() {
            let first = self.accounts.first().ok_or_else(|| SyncError::EmptyRoster {
                message: format!("{} needs a concrete account", kind),
            })?;
            debug!(
                "narrowing {} from all-accounts to first account {}",
                kind, first.id
            );
            return Ok(ScopeKey::Account(first.id.clone()));
        }
        if let ScopeKey::Account(id) = &scope
            && !self.accounts.iter().any(|a| &a.id == id)
        {
            return Err(SyncError::UnknownAccount {
                account_id: id.clone(),
            });
        }
        Ok(scope)
    }

    fn page1_command(&mut self, kind: DataKind, scope: &ScopeKey, account_id: AccountId) -> FetchCommand {
        let generation = self.generations.bump(kind, scope);
        FetchCommand {
            kind,
            account_id,
            scope: scope.clone(),
            page: 1,
            cursor: None,
            generation,
        }
    }

    /// Activation: a tab switch, a scope switch, or a timer-driven revisit.
    /// The caller should render immediately from `display_data` and execute
    /// the returned commands.
    pub fn activate(&mut self, kind: DataKind, scope: ScopeKey, now: u64) -> Result<Vec<FetchCommand>> {
        let scope = self.resolve_scope(kind, scope)?;
        self.transient = None;

        let scope_changed = match &self.active {
            Some((_, prev)) => prev != &scope,
            None => true,
        };
        if scope_changed {
            self.paginator.reset_all();
        } else {
            self.paginator.reset(kind);
        }
        self.active = Some((kind, scope.clone()));

        let mut commands = Vec::new();
        if scope.is_all() && kind.fans_out() {
            // one pull per account, collected into a single composite entry
            if self.store.is_stale(kind, &scope, now, self.ttl_millis) && !self.accounts.is_empty() {
                let generation = self.generations.bump(kind, &scope);
                self.fanouts.insert(
                    kind,
                    FanoutState {
                        generation,
                        expected: self.accounts.len(),
                        results: HashMap::new(),
                    },
                );
                for account in &self.accounts {
                    commands.push(FetchCommand {
                        kind,
                        account_id: account.id.clone(),
                        scope: scope.clone(),
                        page: 1,
                        cursor: None,
                        generation,
                    });
                }
            }
        } else if scope.is_all() && kind.push_capable() {
            // per-account pulls cached under each account scope, only for
            // accounts that are stale
            if !self.all_push_fresh(kind, now) {
                let stale: Vec<AccountId> = self
                    .accounts
                    .iter()
                    .filter(|a| !self.account_fresh(kind, &a.id, now))
                    .map(|a| a.id.clone())
                    .collect();
                for account_id in stale {
                    let account_scope = ScopeKey::Account(account_id.clone());
                    commands.push(self.page1_command(kind, &account_scope, account_id));
                }
            }
        } else {
            let account_id = match scope.account_id() {
                Some(id) => id.to_string(),
                None => {
                    return Err(SyncError::ScopeUnsupported {
                        kind,
                        message: "all-accounts scope undefined for this kind".to_string(),
                    });
                }
            };
            let fresh = if kind.push_capable() {
                self.account_fresh(kind, &account_id, now)
            } else {
                !self.store.is_stale(kind, &scope, now, self.ttl_millis)
            };
            if !fresh {
                let command = self.page1_command(kind, &scope, account_id);
                commands.push(command);
            }
        }
        Ok(commands)
    }

    /// Explicit pagination on the active view. Always pulls, including back
    /// to page 1; page 1 of the stack always carries a null cursor.
    pub fn paginate(&mut self, direction: PageDirection) -> Result<FetchCommand> {
        let (kind, scope) = match &self.active {
            Some(pair) => pair.clone(),
            None => {
                return Err(SyncError::PageOutOfRange {
                    message: "no active view".to_string(),
                });
            }
        };
        if !kind.paginates() {
            return Err(SyncError::NotPaginated { kind });
        }
        let account_id = match scope.account_id() {
            Some(id) => id.to_string(),
            None => {
                return Err(SyncError::ScopeUnsupported {
                    kind,
                    message: "the all-accounts composite does not paginate".to_string(),
                });
            }
        };

        let page = match direction {
            PageDirection::Next => {
                let (has_more, last_cursor) = self.current_page_tail(kind, &scope)?;
                if !has_more {
                    return Err(SyncError::PageOutOfRange {
                        message: format!("no further page of {}", kind),
                    });
                }
                self.paginator.advance(kind, last_cursor)?
            }
            PageDirection::Prev => self.paginator.retreat(kind)?,
        };
        if page == 1 {
            self.transient = None;
        }

        let cursor = self.paginator.cursor_for(kind, page)?;
        let generation = self.generations.bump(kind, &scope);
        Ok(FetchCommand {
            kind,
            account_id,
            scope,
            page,
            cursor,
            generation,
        })
    }

    /// `has_more`/cursor of the page currently on screen: the cache entry
    /// for page 1, the transient slot otherwise.
    fn current_page_tail(&self, kind: DataKind, scope: &ScopeKey) -> Result<(bool, Option<String>)> {
        let page = self.paginator.page(kind);
        if page > 1 {
            if let Some(t) = &self.transient
                && t.kind == kind
                && &t.scope == scope
                && t.page == page
            {
                return Ok((t.has_more, t.last_cursor.clone()));
            }
            return Err(SyncError::PageOutOfRange {
                message: format!("page {} of {} not loaded yet", page, kind),
            });
        }
        match self.store.get(kind, scope) {
            Some(entry) => Ok((entry.has_more, entry.last_cursor.clone())),
            None => Err(SyncError::PageOutOfRange {
                message: format!("no first page of {} to advance from", kind),
            }),
        }
    }

    /// Apply a push frame. Live state is overwritten unconditionally; a
    /// redraw is signalled only when the active view shows the frame's kind
    /// and its scope covers the frame's account.
    pub fn apply_push(&mut self, frame: &PushFrame, now: u64) {
        let effect = self.live.apply(frame, now);
        let (kind, account_id) = match effect {
            PushEffect::Balance(id) => (DataKind::Balance, id),
            PushEffect::Positions(id) => (DataKind::Positions, id),
            PushEffect::PendingOrders(id) => (DataKind::PendingOrders, id),
            PushEffect::Error { account_id, message } => {
                self.signal(RenderSignal::Degraded {
                    account_id,
                    message,
                });
                return;
            }
        };
        if let Some((active_kind, active_scope)) = &self.active
            && *active_kind == kind
            && active_scope.covers_account(&account_id)
        {
            self.signal_refresh(kind, &active_scope.clone());
        }
    }

    /// Apply a completed pull. Outcomes from a superseded generation are
    /// discarded; failures mark the slot degraded but never touch the cache.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome, now: u64) {
        if !self.generations.is_current(&outcome.command) {
            debug!(
                "discarding stale pull result for {} {} (generation {})",
                outcome.command.kind, outcome.command.scope, outcome.command.generation
            );
            return;
        }
        let kind = outcome.command.kind;
        let scope = outcome.command.scope.clone();

        // a page past the first only lands while the view still sits on it;
        // an activation in between resets the paginator and orphans the pull
        if outcome.command.page > 1 {
            let on_page = match &self.active {
                Some((active_kind, active_scope)) => {
                    *active_kind == kind
                        && active_scope == &scope
                        && self.paginator.page(kind) == outcome.command.page
                }
                None => false,
            };
            if !on_page {
                debug!(
                    "discarding page {} result for {} {}; the view moved on",
                    outcome.command.page, kind, scope
                );
                return;
            }
        }

        if scope.is_all() && kind.fans_out() {
            self.apply_fanout_leg(outcome, now);
            return;
        }

        let key = (kind, scope.clone());
        match outcome.result {
            Ok(payload) => {
                self.degraded.remove(&key);
                if outcome.command.page > 1 {
                    self.transient = Some(TransientPage {
                        kind,
                        scope: scope.clone(),
                        page: outcome.command.page,
                        data: payload.data,
                        has_more: payload.has_more,
                        last_cursor: payload.last_cursor,
                    });
                    let _ = self.paginator.set_has_more(kind, payload.has_more);
                } else {
                    if kind.paginates() {
                        let _ = self.paginator.set_has_more(kind, payload.has_more);
                    }
                    self.store.put(
                        kind,
                        scope.clone(),
                        CacheEntry {
                            data: payload.data,
                            has_more: payload.has_more,
                            last_cursor: payload.last_cursor,
                            fetched_at: now,
                        },
                    );
                }
            }
            Err(message) => {
                warn!("pull failed for {} {}: {}", kind, scope, message);
                self.degraded.insert(key);
            }
        }
        self.signal_if_visible(kind, &scope);
    }

    /// A pull result is visible when its slot is the active one, or when it
    /// feeds the active all-accounts view of a push-capable kind.
    fn signal_if_visible(&self, kind: DataKind, scope: &ScopeKey) {
        if let Some((active_kind, active_scope)) = &self.active {
            let visible = *active_kind == kind
                && (active_scope == scope
                    || (active_scope.is_all()
                        && scope
                            .account_id()
                            .map(|id| active_scope.covers_account(id))
                            .unwrap_or(false)));
            if visible {
                self.signal_refresh(kind, &active_scope.clone());
            }
        }
    }

    fn apply_fanout_leg(&mut self, outcome: FetchOutcome, now: u64) {
        let kind = outcome.command.kind;
        let scope = outcome.command.scope.clone();
        let done = {
            let state = match self.fanouts.get_mut(&kind) {
                Some(s) if s.generation == outcome.command.generation => s,
                _ => {
                    debug!("discarding fan-out leg for superseded {} pull", kind);
                    return;
                }
            };
            state
                .results
                .insert(outcome.command.account_id.clone(), outcome.result);
            state.results.len() >= state.expected
        };
        if !done {
            return;
        }

        let state = match self.fanouts.remove(&kind) {
            Some(s) => s,
            None => return,
        };
        let key = (kind, scope.clone());
        let any_failed = state.results.values().any(|r| r.is_err());
        let any_succeeded = state.results.values().any(|r| r.is_ok());

        if !any_succeeded {
            warn!("every account failed the {} fan-out", kind);
            self.degraded.insert(key);
            self.partial.remove(&(kind, scope.clone()));
            self.signal_if_visible(kind, &scope);
            return;
        }

        let mut inputs: Vec<(String, KindData)> = Vec::new();
        for account in &self.accounts {
            if let Some(Ok(payload)) = state.results.get(&account.id) {
                inputs.push((account.name.clone(), payload.data.clone()));
            }
        }
        let data = match kind {
            DataKind::Orders => {
                let merged = aggregate::merge_orders(inputs.iter().filter_map(|(name, d)| {
                    match d {
                        KindData::Orders(items) => Some((name.as_str(), items.as_slice())),
                        _ => None,
                    }
                }));
                KindData::MergedOrders(merged)
            }
            DataKind::Bills => {
                let merged = aggregate::merge_bills(inputs.iter().filter_map(|(name, d)| {
                    match d {
                        KindData::Bills(items) => Some((name.as_str(), items.as_slice())),
                        _ => None,
                    }
                }));
                KindData::MergedBills(merged)
            }
            _ => return,
        };

        // the composite is a single non-paginated entry
        self.store.put(
            kind,
            scope.clone(),
            CacheEntry {
                data,
                has_more: false,
                last_cursor: None,
                fetched_at: now,
            },
        );
        self.degraded.remove(&key);
        if any_failed {
            self.partial.insert(key);
        } else {
            self.partial.remove(&key);
        }
        self.signal_if_visible(kind, &scope);
    }

    /// Build the renderable snapshot for the active view from whatever is on
    /// hand. Never blocks and never triggers a pull.
    pub fn display_data(&self, now: u64) -> Option<DisplayData> {
        let (kind, scope) = self.active.as_ref()?;
        let kind = *kind;

        let page = if kind.paginates() {
            self.paginator.page(kind)
        } else {
            1
        };
        // same source paginate consults, so the flag survives a re-activation
        // that reset the paginator over a still-fresh entry
        let has_more = if kind.paginates() {
            self.current_page_tail(kind, scope)
                .map(|(h, _)| h)
                .unwrap_or(false)
        } else {
            false
        };

        // a loaded non-first page overrides the cached first page
        if page > 1 {
            if let Some(t) = &self.transient
                && t.kind == kind
                && &t.scope == scope
                && t.page == page
            {
                return Some(DisplayData {
                    kind,
                    scope: scope.clone(),
                    view: self.kind_data_view(scope, &t.data),
                    stale: false,
                    partial: false,
                    degraded: self.degraded.contains(&(kind, scope.clone())),
                    page,
                    has_more: t.has_more,
                });
            }
            return Some(DisplayData {
                kind,
                scope: scope.clone(),
                view: ViewData::Empty,
                stale: true,
                partial: false,
                degraded: self.degraded.contains(&(kind, scope.clone())),
                page,
                has_more,
            });
        }

        let (view, stale) = if scope.is_all() && kind.push_capable() {
            self.all_push_view(kind, now)
        } else {
            self.slot_view(kind, scope, now)
        };
        Some(DisplayData {
            kind,
            scope: scope.clone(),
            view,
            stale,
            partial: self.partial.contains(&(kind, scope.clone())),
            degraded: self.degraded.contains(&(kind, scope.clone())),
            page,
            has_more,
        })
    }

    /// View for a single cache slot, preferring the newer of the live
    /// snapshot and the cached page for push-capable kinds.
    fn slot_view(&self, kind: DataKind, scope: &ScopeKey, now: u64) -> (ViewData, bool) {
        let entry = self.store.get(kind, scope);
        let stale = match scope.account_id() {
            Some(id) if kind.push_capable() => !self.account_fresh(kind, id, now),
            _ => is_stale(entry.map(|e| e.fetched_at), now, self.ttl_millis),
        };

        if let Some(id) = scope.account_id()
            && kind.push_capable()
        {
            let cached_at = entry.map(|e| e.fetched_at).unwrap_or(0);
            let name = self.account_name(id);
            match kind {
                DataKind::Balance => {
                    if let Some(snap) = self.live.balance(id)
                        && snap.updated_at >= cached_at
                    {
                        return (ViewData::Balance(snap.value.clone()), stale);
                    }
                }
                DataKind::Positions => {
                    if let Some(snap) = self.live.positions(id)
                        && snap.updated_at >= cached_at
                    {
                        let tagged = aggregate::concat_positions(
                            std::iter::once((name.as_str(), snap.value.as_slice())),
                        );
                        return (ViewData::Positions(tagged), stale);
                    }
                }
                DataKind::PendingOrders => {
                    if let Some(snap) = self.live.pending_orders(id)
                        && snap.updated_at >= cached_at
                    {
                        let tagged = aggregate::concat_pending_orders(
                            std::iter::once((name.as_str(), snap.value.as_slice())),
                        );
                        return (ViewData::PendingOrders(tagged), stale);
                    }
                }
                _ => {}
            }
        }

        let view = match entry {
            Some(e) => self.kind_data_view(scope, &e.data),
            None => ViewData::Empty,
        };
        (view, stale)
    }

    /// All-accounts view of a push-capable kind: per account, the newer of
    /// live snapshot and cached page, aggregated. Accounts with nothing on
    /// hand simply contribute nothing.
    fn all_push_view(&self, kind: DataKind, now: u64) -> (ViewData, bool) {
        let stale = !self.all_push_fresh(kind, now);

        match kind {
            DataKind::Balance => {
                let mut balances = Vec::new();
                for account in &self.accounts {
                    if let Some(b) = self.account_balance(&account.id) {
                        balances.push(b);
                    }
                }
                if balances.is_empty() {
                    return (ViewData::Empty, stale);
                }
                (ViewData::Balance(aggregate::sum_balances(balances.iter())), stale)
            }
            DataKind::Positions => {
                let mut inputs = Vec::new();
                for account in &self.accounts {
                    if let Some(p) = self.account_positions(&account.id) {
                        inputs.push((account.name.clone(), p));
                    }
                }
                if inputs.is_empty() {
                    return (ViewData::Empty, stale);
                }
                let tagged = aggregate::concat_positions(
                    inputs.iter().map(|(n, p)| (n.as_str(), p.as_slice())),
                );
                (ViewData::Positions(tagged), stale)
            }
            DataKind::PendingOrders => {
                let mut inputs = Vec::new();
                for account in &self.accounts {
                    if let Some(p) = self.account_pending_orders(&account.id) {
                        inputs.push((account.name.clone(), p));
                    }
                }
                if inputs.is_empty() {
                    return (ViewData::Empty, stale);
                }
                let tagged = aggregate::concat_pending_orders(
                    inputs.iter().map(|(n, p)| (n.as_str(), p.as_slice())),
                );
                (ViewData::PendingOrders(tagged), stale)
            }
            _ => (ViewData::Empty, stale),
        }
    }

    fn account_balance(&self, account_id: &str) -> Option<transport::models::Balance> {
        let scope = ScopeKey::Account(account_id.to_string());
        let entry = self.store.get(DataKind::Balance, &scope);
        let cached_at = entry.map(|e| e.fetched_at).unwrap_or(0);
        if let Some(snap) = self.live.balance(account_id)
            && snap.updated_at >= cached_at
        {
            return Some(snap.value.clone());
        }
        match entry.map(|e| &e.data) {
            Some(KindData::Balance(b)) => Some(b.clone()),
            _ => None,
        }
    }

    fn account_positions(&self, account_id: &str) -> Option<Vec<transport::models::Position>> {
        let scope = ScopeKey::Account(account_id.to_string());
        let entry = self.store.get(DataKind::Positions, &scope);
        let cached_at = entry.map(|e| e.fetched_at).unwrap_or(0);
        if let Some(snap) = self.live.positions(account_id)
            && snap.updated_at >= cached_at
        {
            return Some(snap.value.clone());
        }
        match entry.map(|e| &e.data) {
            Some(KindData::Positions(p)) => Some(p.clone()),
            _ => None,
        }
    }

    fn account_pending_orders(&self, account_id: &str) -> Option<Vec<transport::models::PendingOrder>> {
        let scope = ScopeKey::Account(account_id.to_string());
        let entry = self.store.get(DataKind::PendingOrders, &scope);
        let cached_at = entry.map(|e| e.fetched_at).unwrap_or(0);
        if let Some(snap) = self.live.pending_orders(account_id)
            && snap.updated_at >= cached_at
        {
            return Some(snap.value.clone());
        }
        match entry.map(|e| &e.data) {
            Some(KindData::PendingOrders(p)) => Some(p.clone()),
            _ => None,
        }
    }

    /// Tag single-slot data with its owning account name so the view shape
    /// matches the aggregate one.
    fn kind_data_view(&self, scope: &ScopeKey, data: &KindData) -> ViewData {
        let name = scope
            .account_id()
            .map(|id| self.account_name(id))
            .unwrap_or_default();
        match data {
            KindData::Balance(b) => ViewData::Balance(b.clone()),
            KindData::Positions(p) => ViewData::Positions(
                aggregate::concat_positions(std::iter::once((name.as_str(), p.as_slice()))),
            ),
            KindData::PendingOrders(p) => ViewData::PendingOrders(
                aggregate::concat_pending_orders(std::iter::once((name.as_str(), p.as_slice()))),
            ),
            KindData::Orders(o) => {
                let tagged = o
                    .iter()
                    .map(|item| crate::aggregate::Sourced {
                        account: name.clone(),
                        item: item.clone(),
                    })
                    .collect();
                ViewData::Orders(tagged)
            }
            KindData::Bills(b) => {
                let tagged = b
                    .iter()
                    .map(|item| crate::aggregate::Sourced {
                        account: name.clone(),
                        item: item.clone(),
                    })
                    .collect();
                ViewData::Bills(tagged)
            }
            KindData::MergedOrders(o) => ViewData::Orders(o.clone()),
            KindData::MergedBills(b) => ViewData::Bills(b.clone()),
            KindData::PositionHistory(h) => ViewData::PositionHistory(h.clone()),
            KindData::EquityCurve(c) => ViewData::EquityCurve(c.clone()),
        }
    }
}
