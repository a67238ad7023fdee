//! Built-in route table - single source of truth for every navigable path.
//!
//! Paths are matched by exact string equality only; there is no pattern or
//! wildcard matching anywhere. Several section paths intentionally resolve
//! to the same shared view (e.g. `GeneralVoucherDashboard`): many paths to
//! one view is allowed, one path to many views is rejected by the builder.

use contracts::{RenderMode, Role};
use once_cell::sync::Lazy;

use super::builder::{RegistryError, ResolverBuilder};
use super::{ViewResolver, FALLBACK_VIEW};

/// Process-wide dispatch table. Initialized once before first use and
/// read-only afterwards.
pub static RESOLVER: Lazy<ViewResolver> =
    Lazy::new(|| builtin_resolver().expect("built-in route table has duplicate keys"));

/// Constructs the full built-in table.
pub fn builtin_resolver() -> Result<ViewResolver, RegistryError> {
    ResolverBuilder::new()
        // ── Section roots ─────────────────────────────────────────────────
        .route("/hrd", "HrdDashboard")
        .route("/pengadaan", "PengadaanDashboard")
        .route("/finance", "FinanceDashboard")
        .route("/gudang", "GudangDashboard")
        .route("/management", "ManagementDashboard")
        .route("/qhse", "QHSENewDashboard")
        .route("/accounting", "AccountingDashboard")
        .route("/tax", "TaxDashboard")
        .route("/procon", "ProconDashboard")
        .route("/marketing", "MarketingDashboard")
        // ── HRD ───────────────────────────────────────────────────────────
        .route("/hrd/karyawan/daftar", "DaftarKaryawanDashboard")
        .route("/hrd/karyawan/tambah", "TambahKaryawanDashboard")
        .route("/hrd/karyawan/kontrak", "KontrakKaryawanDashboard")
        .route("/hrd/gaji/daftar", "DaftarGajiDashboard")
        .route("/hrd/gaji/slip", "SlipGajiDashboard")
        .route("/hrd/gaji/tunjangan", "TunjanganDashboard")
        .route("/hrd/absensi/rekap", "RekapAbsensiDashboard")
        .route("/hrd/absensi/lembur", "LemburDashboard")
        .route("/hrd/cuti/pengajuan", "PengajuanCutiDashboard")
        .route("/hrd/cuti/daftar", "DaftarCutiDashboard")
        .route("/hrd/rekrutmen/daftar", "RekrutmenDashboard")
        .route("/hrd/rekrutmen/lamaran", "LamaranMasukDashboard")
        .route("/hrd/penilaian/kinerja", "PenilaianKinerjaDashboard")
        .route("/hrd/pelatihan/daftar", "PelatihanKaryawanDashboard")
        // ── Pengadaan ─────────────────────────────────────────────────────
        .route("/pengadaan/vendor/daftar", "DaftarVendorDashboard")
        .route("/pengadaan/vendor/evaluasi", "EvaluasiVendorDashboard")
        .route("/pengadaan/permintaan/daftar", "PermintaanPembelianDashboard")
        .route("/pengadaan/po/daftar", "DaftarPoDashboard")
        .route("/pengadaan/po/buat", "BuatPoDashboard")
        .route("/pengadaan/penawaran/daftar", "PenawaranVendorDashboard")
        .route("/pengadaan/kontrak/daftar", "KontrakVendorDashboard")
        .route("/pengadaan/voucher/umum", "GeneralVoucherDashboard")
        // ── Finance ───────────────────────────────────────────────────────
        .route("/finance/voucher/daftar", "DaftarVoucherDashboard")
        .route("/finance/voucher/umum", "GeneralVoucherDashboard")
        .route("/finance/approval/voucher", "ApprovalVoucherDashboard")
        .route("/finance/approval/kasbon", "ApprovalKasbonDashboard")
        .route("/finance/kasbon/daftar", "DaftarKasbonDashboard")
        .route("/finance/kasbon/pengajuan", "PengajuanKasbonDashboard")
        .route("/finance/invoice/daftar", "DaftarInvoiceDashboard")
        .route("/finance/invoice/buat", "BuatInvoiceDashboard")
        .route("/finance/pembayaran/daftar", "DaftarPembayaranDashboard")
        .route("/finance/pembayaran/jadwal", "JadwalPembayaranDashboard")
        .route("/finance/kas/harian", "KasHarianDashboard")
        .route("/finance/bank/rekonsiliasi", "RekonsiliasiBankDashboard")
        .route("/finance/laporan/arus-kas", "ArusKasDashboard")
        // ── Gudang ────────────────────────────────────────────────────────
        .route("/gudang/barang/daftar", "DaftarBarangDashboard")
        .route("/gudang/barang/kategori", "KategoriBarangDashboard")
        .route("/gudang/stok/kartu", "KartuStokDashboard")
        .route("/gudang/stok/opname", "StokOpnameDashboard")
        .route("/gudang/penerimaan/daftar", "PenerimaanBarangDashboard")
        .route("/gudang/pengeluaran/daftar", "PengeluaranBarangDashboard")
        .route("/gudang/mutasi/daftar", "MutasiGudangDashboard")
        .route("/gudang/peminjaman/alat", "PeminjamanAlatDashboard")
        .route("/gudang/voucher/umum", "GeneralVoucherDashboard")
        // ── Management ────────────────────────────────────────────────────
        // The two approval screens switch their action set via the
        // management render mode regardless of who opens them.
        .route_with_mode(
            "/management/approve-kontrak",
            "ApproveKontrakDashboard",
            RenderMode::Management,
        )
        .route_with_mode(
            "/management/penggajian",
            "PengajianActiveDashboard",
            RenderMode::Management,
        )
        .route("/management/laporan/kinerja", "LaporanKinerjaDashboard")
        .route("/management/laporan/keuangan", "LaporanKeuanganDashboard")
        .route("/management/laporan/proyek", "LaporanProyekDashboard")
        // ── QHSE ──────────────────────────────────────────────────────────
        .route("/qhse/insiden/daftar", "DaftarInsidenDashboard")
        .route("/qhse/insiden/lapor", "LaporInsidenDashboard")
        .route("/qhse/inspeksi/jadwal", "JadwalInspeksiDashboard")
        .route("/qhse/inspeksi/temuan", "TemuanInspeksiDashboard")
        .route("/qhse/apd/stok", "StokApdDashboard")
        .route("/qhse/apd/permintaan", "PermintaanApdDashboard")
        .route("/qhse/pelatihan/k3", "PelatihanK3Dashboard")
        .route("/qhse/dokumen/izin-kerja", "IzinKerjaDashboard")
        // ── Accounting ────────────────────────────────────────────────────
        .route("/accounting/jurnal/umum", "JurnalUmumDashboard")
        .route("/accounting/jurnal/penyesuaian", "JurnalPenyesuaianDashboard")
        .route("/accounting/buku-besar", "BukuBesarDashboard")
        .route("/accounting/neraca", "NeracaDashboard")
        .route("/accounting/laba-rugi", "LabaRugiDashboard")
        .route("/accounting/coa/daftar", "DaftarCoaDashboard")
        .route("/accounting/aset/daftar", "DaftarAsetDashboard")
        .route("/accounting/aset/penyusutan", "PenyusutanAsetDashboard")
        .route("/accounting/voucher/umum", "GeneralVoucherDashboard")
        // ── Tax ───────────────────────────────────────────────────────────
        .route("/tax/ppn/masukan", "PpnMasukanDashboard")
        .route("/tax/ppn/keluaran", "PpnKeluaranDashboard")
        .route("/tax/pph21/rekap", "RekapPph21Dashboard")
        .route("/tax/pph23/rekap", "RekapPph23Dashboard")
        .route("/tax/faktur/daftar", "DaftarFakturDashboard")
        .route("/tax/lapor/bulanan", "LaporPajakBulananDashboard")
        .route("/tax/voucher/umum", "GeneralVoucherDashboard")
        // ── Project Control ───────────────────────────────────────────────
        .route("/procon/proyek/daftar", "DaftarProyekDashboard")
        .route("/procon/proyek/progress", "ProgressProyekDashboard")
        .route("/procon/rab/daftar", "DaftarRabDashboard")
        .route("/procon/rab/realisasi", "RealisasiRabDashboard")
        .route("/procon/timesheet/daftar", "TimesheetDashboard")
        .route("/procon/subkon/daftar", "DaftarSubkonDashboard")
        .route("/procon/laporan/mingguan", "LaporanMingguanDashboard")
        // ── Marketing ─────────────────────────────────────────────────────
        .route("/marketing/prospek/daftar", "DaftarProspekDashboard")
        .route("/marketing/penawaran/daftar", "PenawaranProyekDashboard")
        .route("/marketing/penawaran/buat", "BuatPenawaranDashboard")
        .route("/marketing/kontrak/daftar", "DaftarKontrakDashboard")
        .route("/marketing/tender/daftar", "DaftarTenderDashboard")
        .route("/marketing/klien/daftar", "DaftarKlienDashboard")
        // ── Role defaults ─────────────────────────────────────────────────
        .default_view(Role::Hrd, "HrdDashboard")
        .default_view(Role::Pengadaan, "PengadaanDashboard")
        .default_view(Role::Finance, "FinanceDashboard")
        .default_view(Role::Gudang, "GudangDashboard")
        .default_view(Role::Management, "ManagementDashboard")
        .default_view(Role::Qhse, "QHSENewDashboard")
        .default_view(Role::Accounting, "AccountingDashboard")
        .default_view(Role::Tax, "TaxDashboard")
        .default_view(Role::Procon, "ProconDashboard")
        .default_view(Role::Marketing, "MarketingDashboard")
        .default_view(Role::Operational, FALLBACK_VIEW)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::RenderMode;

    #[test]
    fn test_builtin_table_builds() {
        let resolver = builtin_resolver().unwrap();
        assert!(resolver.len() > 90);
    }

    #[test]
    fn test_every_role_has_a_default_view() {
        for role in Role::all() {
            assert!(
                RESOLVER.default_view(role).is_some(),
                "role '{}' has no default view",
                role.code()
            );
        }
    }

    #[test]
    fn test_path_match_wins_for_every_role() {
        for (path, entry) in RESOLVER.routes() {
            for role in Role::all() {
                let r = RESOLVER.resolve(role, Some(path));
                assert_eq!(r.view_id, entry.view_id, "path '{}' lost precedence", path);
                assert_eq!(r.render_mode, entry.render_mode, "path '{}'", path);
            }
        }
    }

    #[test]
    fn test_totality_over_input_grid() {
        let role_codes = ["hrd", "qhse", "operational", "unknown-role", ""];
        let paths = [
            Some("/hrd/gaji/daftar"),
            Some("/no/such/path"),
            Some(""),
            None,
        ];
        for code in role_codes {
            for path in paths {
                let r = RESOLVER.resolve_code(code, path);
                assert!(!r.view_id.is_empty());
            }
        }
    }

    #[test]
    fn test_management_mode_on_exactly_two_routes() {
        let mut management: Vec<&str> = RESOLVER
            .routes()
            .filter(|(_, entry)| entry.render_mode == RenderMode::Management)
            .map(|(path, _)| path)
            .collect();
        management.sort_unstable();
        assert_eq!(
            management,
            vec!["/management/approve-kontrak", "/management/penggajian"]
        );
    }

    #[test]
    fn test_shared_view_is_reachable_from_several_sections() {
        let shared: Vec<&str> = RESOLVER
            .routes()
            .filter(|(_, entry)| entry.view_id == "GeneralVoucherDashboard")
            .map(|(path, _)| path)
            .collect();
        assert!(shared.len() >= 4);
    }

    // The five scenarios from the dashboard shell's acceptance checklist.

    #[test]
    fn test_scenario_hrd_gaji_daftar() {
        let r = RESOLVER.resolve(Role::Hrd, Some("/hrd/gaji/daftar"));
        assert_eq!(r.view_id, "DaftarGajiDashboard");
        assert_eq!(r.render_mode, RenderMode::Default);
    }

    #[test]
    fn test_scenario_finance_approval_voucher() {
        let r = RESOLVER.resolve(Role::Finance, Some("/finance/approval/voucher"));
        assert_eq!(r.view_id, "ApprovalVoucherDashboard");
    }

    #[test]
    fn test_scenario_management_penggajian() {
        let r = RESOLVER.resolve(Role::Management, Some("/management/penggajian"));
        assert_eq!(r.view_id, "PengajianActiveDashboard");
        assert_eq!(r.render_mode, RenderMode::Management);
    }

    #[test]
    fn test_scenario_qhse_default() {
        let r = RESOLVER.resolve(Role::Qhse, None);
        assert_eq!(r.view_id, "QHSENewDashboard");
        assert_eq!(r.render_mode, RenderMode::Default);
    }

    #[test]
    fn test_scenario_unknown_role_unknown_path() {
        let r = RESOLVER.resolve_code("unknown-role", Some("/no/such/path"));
        assert_eq!(r.view_id, "OperationalDashboard");
        assert_eq!(r.render_mode, RenderMode::Default);
    }
}
