use contracts::domain::a005_asset::AssetCategory::{Furniture, It, Machinery, Vehicle};
use contracts::domain::a005_asset::{Asset, AssetStatus};

pub fn sample_assets() -> Vec<Asset> {
    vec![
        Asset::new("LPT-0012", "ThinkPad T14 Gen 4", It, "Jakarta HQ", "2023-02-01", 21_000_000.0),
        Asset::new("LPT-0013", "MacBook Pro 14", It, "Jakarta HQ", "2023-08-15", 32_500_000.0),
        Asset::new("SRV-0002", "Dell PowerEdge R750", It, "Jakarta HQ data room", "2022-04-11", 185_000_000.0),
        Asset {
            status: AssetStatus::UnderMaintenance,
            ..Asset::new("VEH-0004", "Toyota Hilux 4x4", Vehicle, "Balikpapan site", "2021-11-20", 480_000_000.0)
        },
        Asset::new("VEH-0007", "Isuzu Elf NMR", Vehicle, "Surabaya depot", "2022-06-02", 395_000_000.0),
        Asset::new("FRN-0101", "Meeting table 12 seats", Furniture, "Jakarta HQ", "2020-01-17", 14_800_000.0),
        Asset {
            status: AssetStatus::Retired,
            ..Asset::new("FRN-0087", "Reception sofa", Furniture, "Surabaya depot", "2016-03-09", 7_200_000.0)
        },
        Asset::new("MCH-0031", "CNC lathe Haas ST-20", Machinery, "Cikarang plant", "2019-09-30", 1_350_000_000.0),
        Asset::new("MCH-0032", "Air compressor 37kW", Machinery, "Cikarang plant", "2021-05-14", 265_000_000.0),
    ]
}
