use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    domain::{FacilityName, PaymentStatus, RoomColor, RoomNumber, RoomStatus},
    error::ApiError,
    protocol::{
        AddFacilityRequest, AddResidentRequest, AddRoomRequest, FacilityInfo, MutationOutcome,
        OccupancyEntry, RecordPaymentRequest, RemoveResidentRequest, RoomSummary,
    },
};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid server url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Remote call surface of the ledger API. The trait is the seam that lets
/// the UI layer and tests swap the transport.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    async fn fetch_facility_info(
        &self,
    ) -> Result<HashMap<FacilityName, FacilityInfo>, GatewayError>;
    async fn fetch_room_details(
        &self,
    ) -> Result<HashMap<FacilityName, Vec<RoomSummary>>, GatewayError>;
    async fn fetch_room_occupancy(
        &self,
    ) -> Result<HashMap<FacilityName, Vec<OccupancyEntry>>, GatewayError>;
    async fn add_facility(&self, request: AddFacilityRequest) -> Result<String, GatewayError>;
    async fn add_room(&self, request: AddRoomRequest) -> Result<String, GatewayError>;
    async fn add_resident(&self, request: AddResidentRequest) -> Result<String, GatewayError>;
    async fn remove_resident(&self, request: RemoveResidentRequest)
        -> Result<String, GatewayError>;
    async fn record_payment(&self, request: RecordPaymentRequest) -> Result<String, GatewayError>;
}

/// HTTP implementation of [`LedgerGateway`] over reqwest.
pub struct HttpGateway {
    http: Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, GatewayError> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(base_url.as_ref())?,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, GatewayError> {
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| GatewayError::Transport {
                endpoint: path,
                source,
            })?;
        response
            .json()
            .await
            .map_err(|source| GatewayError::Transport {
                endpoint: path,
                source,
            })
    }

    // Mutations report failure through the envelope's `error` key, so the
    // HTTP status is not consulted; an unreadable body is a transport error.
    async fn post_mutation<B: Serialize + ?Sized>(
        &self,
        path: &'static str,
        body: &B,
    ) -> Result<String, GatewayError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                endpoint: path,
                source,
            })?;
        let outcome: MutationOutcome =
            response
                .json()
                .await
                .map_err(|source| GatewayError::Transport {
                    endpoint: path,
                    source,
                })?;
        Ok(outcome.into_result()?)
    }
}

#[async_trait]
impl LedgerGateway for HttpGateway {
    async fn fetch_facility_info(
        &self,
    ) -> Result<HashMap<FacilityName, FacilityInfo>, GatewayError> {
        self.get_json("/facilities").await
    }

    async fn fetch_room_details(
        &self,
    ) -> Result<HashMap<FacilityName, Vec<RoomSummary>>, GatewayError> {
        self.get_json("/rooms").await
    }

    async fn fetch_room_occupancy(
        &self,
    ) -> Result<HashMap<FacilityName, Vec<OccupancyEntry>>, GatewayError> {
        self.get_json("/occupancy").await
    }

    async fn add_facility(&self, request: AddFacilityRequest) -> Result<String, GatewayError> {
        self.post_mutation("/facilities", &request).await
    }

    async fn add_room(&self, request: AddRoomRequest) -> Result<String, GatewayError> {
        self.post_mutation("/rooms", &request).await
    }

    async fn add_resident(&self, request: AddResidentRequest) -> Result<String, GatewayError> {
        self.post_mutation("/residents", &request).await
    }

    async fn remove_resident(
        &self,
        request: RemoveResidentRequest,
    ) -> Result<String, GatewayError> {
        self.post_mutation("/residents/remove", &request).await
    }

    async fn record_payment(&self, request: RecordPaymentRequest) -> Result<String, GatewayError> {
        self.post_mutation("/payments", &request).await
    }
}

/// The in-process view-state cache: facility metadata, facility room
/// lists, and facility occupancy lists. Cloned snapshots of this struct
/// are what the presentation layer renders from.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub facility_info: HashMap<FacilityName, FacilityInfo>,
    pub room_details: HashMap<FacilityName, Vec<RoomSummary>>,
    pub room_occupancy: HashMap<FacilityName, Vec<OccupancyEntry>>,
}

pub type ViewSnapshot = ViewState;

#[derive(Debug, Clone, PartialEq)]
pub struct FacilityOverviewRow {
    pub facility: FacilityName,
    pub total_beds: Option<u32>,
    pub vacant: usize,
    pub partially_occupied: usize,
    pub occupied: usize,
    pub monthly_revenue: f64,
    pub overdue: usize,
    pub upcoming_due: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacilityOverview {
    pub rows: Vec<FacilityOverviewRow>,
    pub total_monthly_revenue: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomTile {
    pub room: RoomNumber,
    pub label: String,
    pub color: RoomColor,
}

impl ViewState {
    /// Per-facility summary rows plus the all-facility revenue total.
    /// Facilities with no rooms yet still appear.
    pub fn facility_overview(&self) -> FacilityOverview {
        let names: BTreeSet<&FacilityName> = self
            .facility_info
            .keys()
            .chain(self.room_details.keys())
            .collect();

        let mut rows = Vec::with_capacity(names.len());
        let mut total_monthly_revenue = 0.0;
        for name in names {
            let rooms = self.room_details.get(name).map(Vec::as_slice).unwrap_or(&[]);
            let occupants = self
                .room_occupancy
                .get(name)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let monthly_revenue: f64 = occupants.iter().map(|entry| entry.amount).sum();
            total_monthly_revenue += monthly_revenue;
            rows.push(FacilityOverviewRow {
                facility: name.clone(),
                total_beds: self.facility_info.get(name).map(|info| info.total_beds),
                vacant: rooms
                    .iter()
                    .filter(|room| room.status == RoomStatus::Vacant)
                    .count(),
                partially_occupied: rooms
                    .iter()
                    .filter(|room| room.status == RoomStatus::PartiallyOccupied)
                    .count(),
                occupied: rooms
                    .iter()
                    .filter(|room| room.status == RoomStatus::Occupied)
                    .count(),
                monthly_revenue,
                overdue: occupants
                    .iter()
                    .filter(|entry| entry.status == PaymentStatus::Overdue)
                    .count(),
                upcoming_due: occupants
                    .iter()
                    .filter(|entry| entry.status == PaymentStatus::UpcomingDue)
                    .count(),
            });
        }

        FacilityOverview {
            rows,
            total_monthly_revenue,
        }
    }

    /// Ordered room tiles for one facility, colored for display.
    pub fn room_tiles(&self, facility: &FacilityName) -> Vec<RoomTile> {
        let mut rooms = self.room_details.get(facility).cloned().unwrap_or_default();
        rooms.sort_by_key(|room| room.room);
        rooms
            .into_iter()
            .map(|room| RoomTile {
                room: room.room,
                label: format!("Room {}\n{}", room.room, room.room_type.label()),
                color: RoomColor::for_room(room.status, room.room_type),
            })
            .collect()
    }

    pub fn residents_in_room(
        &self,
        facility: &FacilityName,
        room: RoomNumber,
    ) -> Vec<OccupancyEntry> {
        self.room_occupancy
            .get(facility)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| entry.room == room)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn occupancy_for_facility(&self, facility: &FacilityName) -> Vec<OccupancyEntry> {
        self.room_occupancy.get(facility).cloned().unwrap_or_default()
    }

    /// Case-insensitive exact-name search across all facilities.
    pub fn locate_resident(&self, name: &str) -> Option<(FacilityName, RoomNumber)> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        let mut facilities: Vec<&FacilityName> = self.room_occupancy.keys().collect();
        facilities.sort();
        for facility in facilities {
            for entry in &self.room_occupancy[facility] {
                if entry.resident.0.to_lowercase() == needle {
                    return Some((facility.clone(), entry.room));
                }
            }
        }
        None
    }
}

/// Which cached maps a mutation invalidates. Room status derives from the
/// resident list, so resident changes refetch room details too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshScope {
    Everything,
    Rooms,
    RoomsAndOccupancy,
    Occupancy,
}

impl RefreshScope {
    fn includes_facilities(self) -> bool {
        matches!(self, Self::Everything)
    }

    fn includes_rooms(self) -> bool {
        matches!(self, Self::Everything | Self::Rooms | Self::RoomsAndOccupancy)
    }

    fn includes_occupancy(self) -> bool {
        matches!(
            self,
            Self::Everything | Self::RoomsAndOccupancy | Self::Occupancy
        )
    }
}

/// Owns the gateway and the view-state cache, and enforces the refresh
/// protocol: every successful mutation wholesale-refetches the maps it
/// could have affected before the next display.
pub struct LedgerClient<G: LedgerGateway> {
    gateway: G,
    state: RwLock<ViewState>,
}

impl<G: LedgerGateway> LedgerClient<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: RwLock::new(ViewState::default()),
        }
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        self.state.read().await.clone()
    }

    pub async fn refresh_all(&self) -> Result<(), GatewayError> {
        self.apply_refresh(RefreshScope::Everything).await
    }

    async fn apply_refresh(&self, scope: RefreshScope) -> Result<(), GatewayError> {
        debug!(?scope, "refreshing view state");
        // Fetch outside the lock so slow calls never block snapshot readers.
        let facility_info = if scope.includes_facilities() {
            Some(self.gateway.fetch_facility_info().await?)
        } else {
            None
        };
        let room_details = if scope.includes_rooms() {
            Some(self.gateway.fetch_room_details().await?)
        } else {
            None
        };
        let room_occupancy = if scope.includes_occupancy() {
            Some(self.gateway.fetch_room_occupancy().await?)
        } else {
            None
        };

        let mut state = self.state.write().await;
        if let Some(facility_info) = facility_info {
            state.facility_info = facility_info;
        }
        if let Some(room_details) = room_details {
            state.room_details = room_details;
        }
        if let Some(room_occupancy) = room_occupancy {
            state.room_occupancy = room_occupancy;
        }
        Ok(())
    }

    async fn run_mutation(
        &self,
        result: Result<String, GatewayError>,
        scope: RefreshScope,
    ) -> Result<String, GatewayError> {
        let message = result?;
        if let Err(err) = self.apply_refresh(scope).await {
            warn!(error = %err, "mutation accepted but view refresh failed");
            return Err(err);
        }
        Ok(message)
    }

    pub async fn add_facility(&self, request: AddFacilityRequest) -> Result<String, GatewayError> {
        let result = self.gateway.add_facility(request).await;
        self.run_mutation(result, RefreshScope::Everything).await
    }

    pub async fn add_room(&self, request: AddRoomRequest) -> Result<String, GatewayError> {
        let result = self.gateway.add_room(request).await;
        self.run_mutation(result, RefreshScope::Rooms).await
    }

    pub async fn add_resident(&self, request: AddResidentRequest) -> Result<String, GatewayError> {
        let result = self.gateway.add_resident(request).await;
        self.run_mutation(result, RefreshScope::RoomsAndOccupancy)
            .await
    }

    pub async fn remove_resident(
        &self,
        request: RemoveResidentRequest,
    ) -> Result<String, GatewayError> {
        let result = self.gateway.remove_resident(request).await;
        self.run_mutation(result, RefreshScope::RoomsAndOccupancy)
            .await
    }

    pub async fn record_payment(
        &self,
        request: RecordPaymentRequest,
    ) -> Result<String, GatewayError> {
        let result = self.gateway.record_payment(request).await;
        self.run_mutation(result, RefreshScope::Occupancy).await
    }

    pub async fn locate_resident(&self, name: &str) -> Option<(FacilityName, RoomNumber)> {
        self.state.read().await.locate_resident(name)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
