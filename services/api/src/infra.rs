use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use villa_map::listings::Listing;
use villa_map::map::{MapPresenter, PresenterOptions, RecordingSurface};

/// The single map session served over HTTP. Requests are serialized through
/// the mutex, one filter event at a time.
pub(crate) type MapSession = MapPresenter<RecordingSurface>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<Vec<Listing>>,
    pub(crate) session: Arc<Mutex<MapSession>>,
}

impl AppState {
    pub(crate) fn new(
        catalog: Vec<Listing>,
        options: PresenterOptions,
        metrics: PrometheusHandle,
    ) -> Self {
        let session = MapPresenter::new(RecordingSurface::default(), catalog.clone(), options);
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            catalog: Arc::new(catalog),
            session: Arc::new(Mutex::new(session)),
        }
    }

    pub(crate) fn session(&self) -> MutexGuard<'_, MapSession> {
        self.session.lock().expect("map session mutex poisoned")
    }
}
