use contracts::domain::a004_travel_request::ApprovalStatus::{Approved, Pending, Rejected};
use contracts::domain::a004_travel_request::TravelRequest;
use contracts::domain::common::Attachment;

pub fn sample_requests() -> Vec<TravelRequest> {
    vec![
        TravelRequest::new("Budi Santoso", "Procurement", "Surabaya", "Supplier audit", "2024-07-01", "2024-07-03", 4_500_000.0),
        TravelRequest::new("Siti Aminah", "Finance", "Medan", "Branch closing review", "2024-07-08", "2024-07-11", 6_250_000.0)
            .with_status(Approved),
        TravelRequest::new("Andi Pratama", "Sales", "Makassar", "Distributor meeting", "2024-07-02", "2024-07-04", 5_100_000.0)
            .with_status(Approved),
        TravelRequest::new("Dewi Lestari", "Human Resources", "Yogyakarta", "Campus recruitment", "2024-07-15", "2024-07-17", 3_800_000.0),
        TravelRequest {
            attachment: Attachment::new("training-invitation.pdf", "https://files.example.id/hr/training-invitation.pdf"),
            ..TravelRequest::new("Rizky Hidayat", "IT", "Singapore", "Cloud architecture training", "2024-08-05", "2024-08-09", 18_750_000.0)
        },
        TravelRequest::new("Putri Maharani", "Marketing", "Denpasar", "Trade expo booth", "2024-06-20", "2024-06-23", 9_400_000.0)
            .with_status(Rejected),
        TravelRequest::new("Agus Salim", "Operations", "Balikpapan", "Plant commissioning", "2024-07-22", "2024-07-30", 12_600_000.0)
            .with_status(Approved),
        TravelRequest::new("Yuni Astuti", "QHSE", "Cikarang", "Safety inspection", "2024-07-03", "2024-07-03", 850_000.0),
        TravelRequest::new("Hendra Gunawan", "Engineering", "Batam", "Vendor factory acceptance test", "2024-07-10", "2024-07-12", 7_300_000.0)
            .with_status(Pending),
        TravelRequest::new("Rina Wulandari", "Legal", "Jakarta", "Court hearing", "2024-06-27", "2024-06-27", 1_200_000.0)
            .with_status(Approved),
        TravelRequest::new("Fajar Nugroho", "Procurement", "Semarang", "Tender clarification", "2024-07-18", "2024-07-19", 2_900_000.0)
            .with_status(Rejected),
    ]
}
