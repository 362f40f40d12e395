use contracts::domain::a003_qhse_incident::IncidentCategory::{Environment, Health, Quality, Safety};
use contracts::domain::a003_qhse_incident::IncidentStatus::{Closed, Investigating, Open};
use contracts::domain::a003_qhse_incident::Severity::{Critical, High, Low, Medium};
use contracts::domain::a003_qhse_incident::{IncidentCategory, IncidentStatus, QhseIncident, Severity};
use contracts::domain::common::Attachment;

/// Инциденты из журнала уже имеют номера
#[allow(clippy::too_many_arguments)]
fn incident(
    number: &str,
    reported_on: &str,
    title: &str,
    location: &str,
    category: IncidentCategory,
    severity: Severity,
    status: IncidentStatus,
    reporter: &str,
) -> QhseIncident {
    let mut incident = QhseIncident::new(reported_on, title, location, category, severity, status, reporter);
    incident.id = Some(number.to_string());
    incident
}

pub fn sample_incidents() -> Vec<QhseIncident> {
    vec![
        incident("INC-000118", "2024-06-26", "Forklift near-miss at loading bay 2", "Cikarang plant", Safety, High, Open, "Agus Salim")
            .with_attachment(Attachment::new("bay2-cctv.mp4", "https://files.example.id/qhse/bay2-cctv.mp4")),
        incident("INC-000117", "2024-06-22", "Oil spill from hydraulic press", "Cikarang plant", Environment, Medium, Investigating, "Rina Wulandari"),
        incident("INC-000116", "2024-06-19", "Batch 24-117 failed torque test", "Assembly line B", Quality, Medium, Open, "Hendra Gunawan"),
        incident("INC-000115", "2024-06-14", "Heat exhaustion during night shift", "Gresik warehouse", Health, High, Closed, "Yuni Astuti"),
        incident("INC-000114", "2024-06-10", "Missing guard on conveyor C4", "Assembly line B", Safety, Critical, Investigating, "Agus Salim")
            .with_attachment(Attachment::new("c4-guard.jpg", "https://files.example.id/qhse/c4-guard.jpg")),
        incident("INC-000113", "2024-06-03", "Expired fire extinguishers in office wing", "Jakarta HQ", Safety, Low, Closed, "Fajar Nugroho"),
        incident("INC-000112", "2024-05-28", "Wastewater pH above permit limit", "Cikarang plant", Environment, High, Investigating, "Rina Wulandari"),
        incident("INC-000111", "2024-05-20", "Customer complaint: paint blistering", "Jakarta HQ", Quality, Low, Closed, "Hendra Gunawan"),
        incident("INC-000110", "2024-05-11", "Noise level over 85 dB in press shop", "Cikarang plant", Health, Medium, Open, "Yuni Astuti"),
    ]
}
