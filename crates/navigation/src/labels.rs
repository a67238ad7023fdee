//! View labels - single source of truth for dashboard titles.
//!
//! Keys are the view ids produced by the resolver; display strings follow
//! the business vocabulary of the screens themselves.

use contracts::Role;

use crate::resolver::table::RESOLVER;

/// Title shown for a view id nothing in the table knows about.
pub const FALLBACK_LABEL: &str = "Dashboard";

/// Human readable title for a resolved view id.
///
/// Fallback: [`FALLBACK_LABEL`].
pub fn view_label_for_id(view_id: &str) -> &'static str {
    match view_id {
        // ── Section home screens ──────────────────────────────────────────
        "HrdDashboard" => "Beranda HRD",
        "PengadaanDashboard" => "Beranda Pengadaan",
        "FinanceDashboard" => "Beranda Finance",
        "GudangDashboard" => "Beranda Gudang",
        "ManagementDashboard" => "Beranda Management",
        "QHSENewDashboard" => "Beranda QHSE",
        "AccountingDashboard" => "Beranda Accounting",
        "TaxDashboard" => "Beranda Pajak",
        "ProconDashboard" => "Beranda Project Control",
        "MarketingDashboard" => "Beranda Marketing",
        "OperationalDashboard" => "Beranda Operasional",

        // ── HRD ───────────────────────────────────────────────────────────
        "DaftarKaryawanDashboard" => "Daftar Karyawan",
        "TambahKaryawanDashboard" => "Tambah Karyawan",
        "KontrakKaryawanDashboard" => "Kontrak Karyawan",
        "DaftarGajiDashboard" => "Daftar Gaji",
        "SlipGajiDashboard" => "Slip Gaji",
        "TunjanganDashboard" => "Tunjangan",
        "RekapAbsensiDashboard" => "Rekap Absensi",
        "LemburDashboard" => "Lembur",
        "PengajuanCutiDashboard" => "Pengajuan Cuti",
        "DaftarCutiDashboard" => "Daftar Cuti",
        "RekrutmenDashboard" => "Rekrutmen",
        "LamaranMasukDashboard" => "Lamaran Masuk",
        "PenilaianKinerjaDashboard" => "Penilaian Kinerja",
        "PelatihanKaryawanDashboard" => "Pelatihan Karyawan",

        // ── Pengadaan ─────────────────────────────────────────────────────
        "DaftarVendorDashboard" => "Daftar Vendor",
        "EvaluasiVendorDashboard" => "Evaluasi Vendor",
        "PermintaanPembelianDashboard" => "Permintaan Pembelian",
        "DaftarPoDashboard" => "Daftar PO",
        "BuatPoDashboard" => "Buat PO",
        "PenawaranVendorDashboard" => "Penawaran Vendor",
        "KontrakVendorDashboard" => "Kontrak Vendor",
        "GeneralVoucherDashboard" => "Voucher Umum",

        // ── Finance ───────────────────────────────────────────────────────
        "DaftarVoucherDashboard" => "Daftar Voucher",
        "ApprovalVoucherDashboard" => "Approval Voucher",
        "ApprovalKasbonDashboard" => "Approval Kasbon",
        "DaftarKasbonDashboard" => "Daftar Kasbon",
        "PengajuanKasbonDashboard" => "Pengajuan Kasbon",
        "DaftarInvoiceDashboard" => "Daftar Invoice",
        "BuatInvoiceDashboard" => "Buat Invoice",
        "DaftarPembayaranDashboard" => "Daftar Pembayaran",
        "JadwalPembayaranDashboard" => "Jadwal Pembayaran",
        "KasHarianDashboard" => "Kas Harian",
        "RekonsiliasiBankDashboard" => "Rekonsiliasi Bank",
        "ArusKasDashboard" => "Arus Kas",

        // ── Gudang ────────────────────────────────────────────────────────
        "DaftarBarangDashboard" => "Daftar Barang",
        "KategoriBarangDashboard" => "Kategori Barang",
        "KartuStokDashboard" => "Kartu Stok",
        "StokOpnameDashboard" => "Stok Opname",
        "PenerimaanBarangDashboard" => "Penerimaan Barang",
        "PengeluaranBarangDashboard" => "Pengeluaran Barang",
        "MutasiGudangDashboard" => "Mutasi Gudang",
        "PeminjamanAlatDashboard" => "Peminjaman Alat",

        // ── Management ────────────────────────────────────────────────────
        "ApproveKontrakDashboard" => "Approve Kontrak",
        "PengajianActiveDashboard" => "Penggajian Aktif",
        "LaporanKinerjaDashboard" => "Laporan Kinerja",
        "LaporanKeuanganDashboard" => "Laporan Keuangan",
        "LaporanProyekDashboard" => "Laporan Proyek",

        // ── QHSE ──────────────────────────────────────────────────────────
        "DaftarInsidenDashboard" => "Daftar Insiden",
        "LaporInsidenDashboard" => "Lapor Insiden",
        "JadwalInspeksiDashboard" => "Jadwal Inspeksi",
        "TemuanInspeksiDashboard" => "Temuan Inspeksi",
        "StokApdDashboard" => "Stok APD",
        "PermintaanApdDashboard" => "Permintaan APD",
        "PelatihanK3Dashboard" => "Pelatihan K3",
        "IzinKerjaDashboard" => "Izin Kerja",

        // ── Accounting ────────────────────────────────────────────────────
        "JurnalUmumDashboard" => "Jurnal Umum",
        "JurnalPenyesuaianDashboard" => "Jurnal Penyesuaian",
        "BukuBesarDashboard" => "Buku Besar",
        "NeracaDashboard" => "Neraca",
        "LabaRugiDashboard" => "Laba Rugi",
        "DaftarCoaDashboard" => "Daftar COA",
        "DaftarAsetDashboard" => "Daftar Aset",
        "PenyusutanAsetDashboard" => "Penyusutan Aset",

        // ── Tax ───────────────────────────────────────────────────────────
        "PpnMasukanDashboard" => "PPN Masukan",
        "PpnKeluaranDashboard" => "PPN Keluaran",
        "RekapPph21Dashboard" => "Rekap PPh 21",
        "RekapPph23Dashboard" => "Rekap PPh 23",
        "DaftarFakturDashboard" => "Daftar Faktur",
        "LaporPajakBulananDashboard" => "Lapor Pajak Bulanan",

        // ── Project Control ───────────────────────────────────────────────
        "DaftarProyekDashboard" => "Daftar Proyek",
        "ProgressProyekDashboard" => "Progress Proyek",
        "DaftarRabDashboard" => "Daftar RAB",
        "RealisasiRabDashboard" => "Realisasi RAB",
        "TimesheetDashboard" => "Timesheet",
        "DaftarSubkonDashboard" => "Daftar Subkontraktor",
        "LaporanMingguanDashboard" => "Laporan Mingguan",

        // ── Marketing ─────────────────────────────────────────────────────
        "DaftarProspekDashboard" => "Daftar Prospek",
        "PenawaranProyekDashboard" => "Penawaran Proyek",
        "BuatPenawaranDashboard" => "Buat Penawaran",
        "DaftarKontrakDashboard" => "Daftar Kontrak",
        "DaftarTenderDashboard" => "Daftar Tender",
        "DaftarKlienDashboard" => "Daftar Klien",

        _ => FALLBACK_LABEL,
    }
}

/// Title for the screen a registered path lands on.
///
/// Unregistered paths get [`FALLBACK_LABEL`], matching the resolver's own
/// degrade-instead-of-fail behavior.
pub fn label_for_path(path: &str) -> &'static str {
    RESOLVER
        .route(path)
        .map(|entry| view_label_for_id(entry.view_id))
        .unwrap_or(FALLBACK_LABEL)
}

/// Sidebar heading for a role's section.
pub fn section_label(role: Role) -> &'static str {
    match role {
        Role::Hrd => "Sumber Daya Manusia",
        Role::Pengadaan => "Pengadaan Barang & Jasa",
        Role::Finance => "Keuangan",
        Role::Gudang => "Pergudangan",
        Role::Management => "Manajemen",
        Role::Qhse => "QHSE",
        Role::Accounting => "Akuntansi",
        Role::Tax => "Perpajakan",
        Role::Procon => "Pengendalian Proyek",
        Role::Marketing => "Pemasaran",
        Role::Operational => "Operasional",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_view_has_a_label() {
        for (path, entry) in RESOLVER.routes() {
            assert_ne!(
                view_label_for_id(entry.view_id),
                FALLBACK_LABEL,
                "view '{}' (path '{}') has no label",
                entry.view_id,
                path
            );
        }
        for (role, view_id) in RESOLVER.default_views() {
            assert_ne!(
                view_label_for_id(view_id),
                FALLBACK_LABEL,
                "default view of role '{}' has no label",
                role.code()
            );
        }
    }

    #[test]
    fn test_label_for_path() {
        assert_eq!(label_for_path("/hrd/gaji/daftar"), "Daftar Gaji");
        assert_eq!(label_for_path("/no/such/path"), FALLBACK_LABEL);
    }

    #[test]
    fn test_unknown_view_gets_fallback() {
        assert_eq!(view_label_for_id("SomethingElseDashboard"), FALLBACK_LABEL);
    }

    #[test]
    fn test_every_role_has_a_section_label() {
        for role in Role::all() {
            assert!(!section_label(role).is_empty());
        }
    }
}
