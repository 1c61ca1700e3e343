//! End-to-end runs of both algorithms on the statevector backend.

use huginn_adapter_sim::SimulatorBackend;
use huginn_algo::{
    bernstein_vazirani, bernstein_vazirani_secrets, bernstein_vazirani_with_ancilla, classify,
    deutsch_jozsa, deutsch_jozsa_cases, deutsch_jozsa_with_ancilla, recover_secret,
    FunctionClass, DEFAULT_THRESHOLD,
};
use huginn_demos::sample;
use huginn_diagram::{comparison_chart, ChartSpec, SvgRenderer};

const SHOTS: u32 = 1000;

#[tokio::test]
async fn deutsch_jozsa_classifies_every_case() {
    let backend = SimulatorBackend::new();

    for n in [2u8, 3] {
        for case in deutsch_jozsa_cases(n).unwrap() {
            let circuit = deutsch_jozsa(&case.truth_table).unwrap();
            let result = sample(&backend, &circuit, SHOTS).await.unwrap();
            let verdict = classify(&result.counts, n, DEFAULT_THRESHOLD).unwrap();

            assert_eq!(
                verdict.class, case.class,
                "{n}-qubit case '{}' misclassified",
                case.name
            );
            // The simulator is exact, so the zero probability is 0 or 1.
            let expected_p = if case.class == FunctionClass::Constant {
                1.0
            } else {
                0.0
            };
            assert!(
                (verdict.zero_probability - expected_p).abs() < 1e-12,
                "case '{}': P(0…0) = {}",
                case.name,
                verdict.zero_probability
            );
        }
    }
}

#[tokio::test]
async fn deutsch_jozsa_ancilla_variant_agrees() {
    let backend = SimulatorBackend::new();

    for n in [2u8, 3] {
        for case in deutsch_jozsa_cases(n).unwrap() {
            let circuit = deutsch_jozsa_with_ancilla(&case.truth_table).unwrap();
            assert_eq!(circuit.num_qubits() as u8, n + 1);

            let result = sample(&backend, &circuit, SHOTS).await.unwrap();
            // Histogram keys cover only the measured work qubits.
            assert!(result.counts.iter().all(|(k, _)| k.len() == n as usize));

            let verdict = classify(&result.counts, n, DEFAULT_THRESHOLD).unwrap();
            assert_eq!(
                verdict.class, case.class,
                "{n}-qubit ancilla case '{}' misclassified",
                case.name
            );
        }
    }
}

#[tokio::test]
async fn bernstein_vazirani_recovers_every_secret() {
    let backend = SimulatorBackend::new();

    for n in [2u8, 3] {
        for secret in bernstein_vazirani_secrets(n).unwrap() {
            for ancilla in [false, true] {
                let circuit = if ancilla {
                    bernstein_vazirani_with_ancilla(&secret).unwrap()
                } else {
                    bernstein_vazirani(&secret).unwrap()
                };
                let result = sample(&backend, &circuit, SHOTS).await.unwrap();
                let recovery = recover_secret(&result.counts, n).unwrap();

                assert_eq!(
                    recovery.secret, secret,
                    "secret {secret} not recovered (ancilla: {ancilla})"
                );
                assert!((recovery.probability - 1.0).abs() < 1e-12);
                assert!(!recovery.tied);
            }
        }
    }
}

#[tokio::test]
async fn variants_produce_identical_work_histograms() {
    let backend = SimulatorBackend::new();

    for case in deutsch_jozsa_cases(3).unwrap() {
        let phase = deutsch_jozsa(&case.truth_table).unwrap();
        let aux = deutsch_jozsa_with_ancilla(&case.truth_table).unwrap();

        let p = sample(&backend, &phase, SHOTS).await.unwrap();
        let a = sample(&backend, &aux, SHOTS).await.unwrap();

        // Deterministic cases land on a single bitstring in both variants.
        if let (Some((kp, np)), Some((ka, na))) =
            (p.counts.most_frequent(), a.counts.most_frequent())
        {
            if np == SHOTS as u64 && na == SHOTS as u64 {
                assert_eq!(kp, ka, "case '{}' diverged between variants", case.name);
            }
        }
    }
}

#[test]
fn circuit_diagrams_have_expected_structure() {
    let case = &deutsch_jozsa_cases(3).unwrap()[6]; // majority
    assert_eq!(case.name, "majority");

    let circuit = deutsch_jozsa(&case.truth_table).unwrap();
    let svg = SvgRenderer::new(&circuit).unwrap().render();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("|q0⟩"));
    assert!(svg.contains("|q2⟩"));
    for stage in ["superposition", "oracle", "interference"] {
        assert!(svg.contains(stage), "missing stage label '{stage}'");
    }

    let aux = deutsch_jozsa_with_ancilla(&case.truth_table).unwrap();
    let svg = SvgRenderer::new(&aux).unwrap().render();
    assert!(svg.contains("|aux⟩"));
}

#[test]
fn comparison_chart_reflects_circuit_sizes() {
    let secret = "11".parse().unwrap();
    let phase = bernstein_vazirani(&secret).unwrap();
    let aux = bernstein_vazirani_with_ancilla(&secret).unwrap();

    let spec = ChartSpec::compare("bv", ("phase oracle", &phase), ("with ancilla", &aux));
    assert_eq!(spec.series[0].values[0], 2.0);
    assert_eq!(spec.series[1].values[0], 3.0);

    let svg = comparison_chart(&spec).unwrap();
    assert!(svg.contains("phase oracle"));
    assert!(svg.contains("with ancilla"));
    assert!(svg.contains("qubits"));
}
