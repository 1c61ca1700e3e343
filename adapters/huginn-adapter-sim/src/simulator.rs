//! Simulator backend implementation.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use huginn_hal::{
    Backend, BackendConfig, Capabilities, Counts, ExecutionResult, HalError, HalResult, Job,
    JobId, JobStatus, ValidationResult,
};
use huginn_ir::{Circuit, InstructionKind};

use crate::statevector::Statevector;

const DEFAULT_MAX_QUBITS: u32 = 8;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector sampling backend.
///
/// Executes circuits exactly and samples measurement outcomes per shot.
/// Classical bitstrings are assembled from the circuit's measurement map,
/// so a circuit that measures only its work qubits yields work-bit
/// histograms with the ancilla excluded.
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Cached capabilities.
    capabilities: Capabilities,
    /// Completed jobs.
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with a custom qubit limit.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfig::new("statevector"),
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Create a backend from configuration (`max_qubits` in `extra`).
    pub fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = config
            .extra
            .get("max_qubits")
            .and_then(serde_json::Value::as_u64)
            .map_or(DEFAULT_MAX_QUBITS, |v| v as u32);

        Ok(Self {
            config,
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
        })
    }

    fn validation_errors(&self, circuit: &Circuit) -> Vec<String> {
        let mut reasons = vec![];

        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            reasons.push(format!(
                "circuit has {} qubits but the simulator supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            ));
        }

        for inst in circuit.instructions() {
            if let InstructionKind::Gate(gate) = inst.kind {
                if !self.capabilities.gate_set.contains(gate) {
                    reasons.push(format!("gate '{gate}' is not supported"));
                }
            }
        }

        if circuit.measurement_map().is_empty() {
            reasons.push("circuit has no measurements, nothing to sample".to_string());
        }

        reasons
    }

    /// Run the simulation synchronously.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        let num_clbits = circuit.num_clbits();
        let measurements = circuit.measurement_map();
        debug!(num_qubits, shots, "starting simulation");

        let mut rng = rand::thread_rng();
        let mut counts = Counts::new();

        for _ in 0..shots {
            let mut sv = Statevector::new(num_qubits);
            for inst in circuit.instructions() {
                sv.apply(inst);
            }

            let outcome = sv.sample(&mut rng);

            // Later measurements of the same clbit overwrite earlier ones,
            // matching program order.
            let mut bits = vec![b'0'; num_clbits];
            for (qubit, clbit) in &measurements {
                let value = (outcome >> qubit.0 as usize) & 1;
                bits[clbit.0 as usize] = b'0' + value as u8;
            }
            let bitstring = String::from_utf8(bits).unwrap_or_default();
            counts.insert(bitstring, 1);
        }

        let elapsed = start.elapsed();
        debug!(?elapsed, "simulation completed");

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn is_available(&self) -> HalResult<bool> {
        Ok(true)
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        let reasons = self.validation_errors(circuit);
        if reasons.is_empty() {
            Ok(ValidationResult::Valid)
        } else {
            Ok(ValidationResult::Invalid { reasons })
        }
    }

    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        if shots == 0 {
            return Err(HalError::InvalidShots("shots must be positive".into()));
        }
        if shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{shots} exceeds the backend limit of {}",
                self.capabilities.max_shots
            )));
        }

        let reasons = self.validation_errors(circuit);
        if !reasons.is_empty() {
            return Err(HalError::InvalidCircuit(reasons.join("; ")));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        debug!(%job_id, "submitted job");

        // A statevector at this scale finishes faster than any queueing
        // machinery would, so the job completes within submit().
        let result = self.run_simulation(circuit, shots);

        let job = Job::new(job_id.clone(), shots)
            .with_backend(&self.config.name)
            .with_status(JobStatus::Completed);

        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.insert(
            job_id.0.clone(),
            SimJob {
                job,
                result: Some(result),
            },
        );

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .and_then(|j| j.result.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(sim_job) = jobs.get_mut(&job_id.0) {
            // Jobs complete inside submit(), so cancellation of a known job
            // is a no-op on a terminal state.
            if !sim_job.job.status.is_terminal() {
                sim_job.job = sim_job.job.clone().with_status(JobStatus::Cancelled);
            }
            Ok(())
        } else {
            Err(HalError::JobNotFound(job_id.0.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huginn_ir::QubitId;

    #[tokio::test]
    async fn test_simulator_capabilities() {
        let backend = SimulatorBackend::new();
        let caps = backend.capabilities();

        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, DEFAULT_MAX_QUBITS);
    }

    #[tokio::test]
    async fn test_simulator_bell_state() {
        let backend = SimulatorBackend::new();

        let mut circuit = Circuit::with_size("bell", 2, 2);
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        circuit.measure_all().unwrap();

        let job_id = backend.submit(&circuit, 1000).await.unwrap();
        let status = backend.status(&job_id).await.unwrap();
        assert!(status.is_success());

        let result = backend.result(&job_id).await.unwrap();
        assert_eq!(result.shots, 1000);

        // Bell state should produce only 00 and 11.
        let counts = &result.counts;
        assert_eq!(counts.get("00") + counts.get("11"), 1000);
        assert_eq!(counts.get("01") + counts.get("10"), 0);
    }

    #[tokio::test]
    async fn test_partial_measurement_excludes_ancilla() {
        let backend = SimulatorBackend::new();

        // Put the third qubit in |1⟩ but only measure the first two.
        let mut circuit = Circuit::with_size("partial", 3, 2);
        circuit.x(QubitId(2)).unwrap();
        circuit.measure(QubitId(0), huginn_ir::ClbitId(0)).unwrap();
        circuit.measure(QubitId(1), huginn_ir::ClbitId(1)).unwrap();

        let job_id = backend.submit(&circuit, 100).await.unwrap();
        let result = backend.result(&job_id).await.unwrap();

        assert_eq!(result.counts.get("00"), 100);
    }

    #[tokio::test]
    async fn test_zero_shots_rejected() {
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::with_size("test", 1, 1);
        circuit.measure_all().unwrap();

        let result = backend.submit(&circuit, 0).await;
        assert!(matches!(result, Err(HalError::InvalidShots(_))));
    }

    #[tokio::test]
    async fn test_unmeasured_circuit_invalid() {
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::with_size("test", 1, 0);
        circuit.h(QubitId(0)).unwrap();

        let validation = backend.validate(&circuit).await.unwrap();
        assert!(!validation.is_valid());

        let result = backend.submit(&circuit, 100).await;
        assert!(matches!(result, Err(HalError::InvalidCircuit(_))));
    }

    #[tokio::test]
    async fn test_too_many_qubits() {
        let backend = SimulatorBackend::with_max_qubits(2);
        let mut circuit = Circuit::with_size("test", 4, 4);
        circuit.measure_all().unwrap();

        let result = backend.submit(&circuit, 100).await;
        assert!(matches!(result, Err(HalError::InvalidCircuit(_))));
    }

    #[tokio::test]
    async fn test_wait_returns_result() {
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::with_size("test", 1, 1);
        circuit.x(QubitId(0)).unwrap();
        circuit.measure_all().unwrap();

        let job_id = backend.submit(&circuit, 50).await.unwrap();
        let result = backend.wait(&job_id).await.unwrap();
        assert_eq!(result.counts.get("1"), 50);
    }
}
