use contracts::domain::a002_inventory_item::ItemCategory::{Component, Consumable, FinishedGood, RawMaterial};
use contracts::domain::a002_inventory_item::InventoryItem;

pub fn sample_stock() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("JKT-01", "STL-PLT-3MM", "Steel plate 3mm", RawMaterial, 420, "sheet", 385_000.0, "2024-06-20"),
        InventoryItem::new("JKT-01", "BLT-M8-50", "Hex bolt M8x50", Component, 6_500, "pcs", 1_250.0, "2024-06-11"),
        InventoryItem::new("JKT-01", "PMP-CNT-200", "Centrifugal pump 200L/min", FinishedGood, 7, "unit", 18_900_000.0, "2024-05-29"),
        InventoryItem::new("JKT-01", "GLV-NTR-L", "Nitrile gloves L", Consumable, 0, "box", 95_000.0, "2024-04-02"),
        InventoryItem::new("SBY-02", "STL-PLT-3MM", "Steel plate 3mm", RawMaterial, 35, "sheet", 390_000.0, "2024-06-03"),
        InventoryItem::new("SBY-02", "VLV-BAL-2IN", "Ball valve 2in", Component, 120, "pcs", 465_000.0, "2024-06-18"),
        InventoryItem::new("SBY-02", "PNL-CTL-A1", "Control panel A1", FinishedGood, 3, "unit", 42_500_000.0, "2024-03-15"),
        InventoryItem::new("SBY-02", "WLD-ROD-26", "Welding rod 2.6mm", Consumable, 48, "kg", 62_000.0, "2024-06-24"),
        InventoryItem::new("MKS-03", "PIP-HDPE-4", "HDPE pipe 4in", RawMaterial, 0, "m", 128_000.0, "2024-02-10"),
        InventoryItem::new("MKS-03", "BRG-6205", "Bearing 6205", Component, 9, "pcs", 87_500.0, "2024-05-21"),
    ]
}
