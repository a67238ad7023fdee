//! Role-scoped sidebar menu definitions.
//!
//! Every item points at a path the built-in route table can resolve; the
//! shell renders the groups and feeds clicked paths straight into the
//! resolver. Labels come from the view label table so the sidebar and the
//! opened screen always agree.

use contracts::Role;

use crate::labels::label_for_path;

/// One clickable sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Collapsible sidebar group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: Vec<MenuItem>,
}

fn item(path: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        path,
        label: label_for_path(path),
        icon,
    }
}

/// Sidebar groups visible to the given role.
///
/// The operational role has no section of its own and gets an empty
/// sidebar; it only ever sees its default dashboard.
pub fn menu_groups_for_role(role: Role) -> Vec<MenuGroup> {
    match role {
        Role::Hrd => vec![
            MenuGroup {
                id: "kepegawaian",
                label: "Kepegawaian",
                icon: "users",
                items: vec![
                    item("/hrd/karyawan/daftar", "users"),
                    item("/hrd/karyawan/tambah", "contact"),
                    item("/hrd/karyawan/kontrak", "file-text"),
                ],
            },
            MenuGroup {
                id: "penggajian",
                label: "Penggajian",
                icon: "dollar-sign",
                items: vec![
                    item("/hrd/gaji/daftar", "dollar-sign"),
                    item("/hrd/gaji/slip", "receipt"),
                    item("/hrd/gaji/tunjangan", "tag"),
                ],
            },
            MenuGroup {
                id: "kehadiran",
                label: "Kehadiran",
                icon: "calendar",
                items: vec![
                    item("/hrd/absensi/rekap", "calendar"),
                    item("/hrd/absensi/lembur", "activity"),
                    item("/hrd/cuti/pengajuan", "file-text"),
                    item("/hrd/cuti/daftar", "list"),
                ],
            },
            MenuGroup {
                id: "pengembangan",
                label: "Pengembangan",
                icon: "layers",
                items: vec![
                    item("/hrd/rekrutmen/daftar", "users"),
                    item("/hrd/rekrutmen/lamaran", "file-text"),
                    item("/hrd/penilaian/kinerja", "bar-chart"),
                    item("/hrd/pelatihan/daftar", "calendar"),
                ],
            },
        ],
        Role::Pengadaan => vec![
            MenuGroup {
                id: "vendor",
                label: "Vendor",
                icon: "store",
                items: vec![
                    item("/pengadaan/vendor/daftar", "store"),
                    item("/pengadaan/vendor/evaluasi", "bar-chart"),
                    item("/pengadaan/kontrak/daftar", "file-text"),
                ],
            },
            MenuGroup {
                id: "pembelian",
                label: "Pembelian",
                icon: "shopping-cart",
                items: vec![
                    item("/pengadaan/permintaan/daftar", "list"),
                    item("/pengadaan/po/daftar", "shopping-cart"),
                    item("/pengadaan/po/buat", "file-text"),
                    item("/pengadaan/penawaran/daftar", "tag"),
                ],
            },
            MenuGroup {
                id: "kas",
                label: "Kas",
                icon: "cash",
                items: vec![item("/pengadaan/voucher/umum", "receipt")],
            },
        ],
        Role::Finance => vec![
            MenuGroup {
                id: "voucher",
                label: "Voucher",
                icon: "receipt",
                items: vec![
                    item("/finance/voucher/daftar", "receipt"),
                    item("/finance/voucher/umum", "receipt"),
                    item("/finance/approval/voucher", "file-text"),
                ],
            },
            MenuGroup {
                id: "kasbon",
                label: "Kasbon",
                icon: "cash",
                items: vec![
                    item("/finance/kasbon/daftar", "list"),
                    item("/finance/kasbon/pengajuan", "file-text"),
                    item("/finance/approval/kasbon", "file-text"),
                ],
            },
            MenuGroup {
                id: "tagihan",
                label: "Tagihan",
                icon: "file-text",
                items: vec![
                    item("/finance/invoice/daftar", "file-text"),
                    item("/finance/invoice/buat", "file-text"),
                    item("/finance/pembayaran/daftar", "credit-card"),
                    item("/finance/pembayaran/jadwal", "calendar"),
                ],
            },
            MenuGroup {
                id: "kas-bank",
                label: "Kas & Bank",
                icon: "dollar-sign",
                items: vec![
                    item("/finance/kas/harian", "cash"),
                    item("/finance/bank/rekonsiliasi", "credit-card"),
                    item("/finance/laporan/arus-kas", "bar-chart"),
                ],
            },
        ],
        Role::Gudang => vec![
            MenuGroup {
                id: "barang",
                label: "Barang",
                icon: "package",
                items: vec![
                    item("/gudang/barang/daftar", "package"),
                    item("/gudang/barang/kategori", "tag"),
                    item("/gudang/stok/kartu", "list"),
                    item("/gudang/stok/opname", "table"),
                ],
            },
            MenuGroup {
                id: "pergerakan",
                label: "Pergerakan",
                icon: "layers",
                items: vec![
                    item("/gudang/penerimaan/daftar", "package"),
                    item("/gudang/pengeluaran/daftar", "package-x"),
                    item("/gudang/mutasi/daftar", "layers"),
                    item("/gudang/peminjaman/alat", "calendar"),
                ],
            },
            MenuGroup {
                id: "kas",
                label: "Kas",
                icon: "cash",
                items: vec![item("/gudang/voucher/umum", "receipt")],
            },
        ],
        Role::Management => vec![
            MenuGroup {
                id: "approval",
                label: "Approval",
                icon: "file-text",
                items: vec![
                    item("/management/approve-kontrak", "file-text"),
                    item("/management/penggajian", "dollar-sign"),
                ],
            },
            MenuGroup {
                id: "laporan",
                label: "Laporan",
                icon: "bar-chart",
                items: vec![
                    item("/management/laporan/kinerja", "bar-chart"),
                    item("/management/laporan/keuangan", "dollar-sign"),
                    item("/management/laporan/proyek", "layers"),
                ],
            },
        ],
        Role::Qhse => vec![
            MenuGroup {
                id: "insiden",
                label: "Insiden",
                icon: "activity",
                items: vec![
                    item("/qhse/insiden/daftar", "list"),
                    item("/qhse/insiden/lapor", "file-text"),
                ],
            },
            MenuGroup {
                id: "inspeksi",
                label: "Inspeksi",
                icon: "calendar",
                items: vec![
                    item("/qhse/inspeksi/jadwal", "calendar"),
                    item("/qhse/inspeksi/temuan", "list"),
                ],
            },
            MenuGroup {
                id: "apd",
                label: "APD",
                icon: "package",
                items: vec![
                    item("/qhse/apd/stok", "package"),
                    item("/qhse/apd/permintaan", "file-text"),
                ],
            },
            MenuGroup {
                id: "dokumen",
                label: "Dokumen",
                icon: "file-text",
                items: vec![
                    item("/qhse/pelatihan/k3", "calendar"),
                    item("/qhse/dokumen/izin-kerja", "file-text"),
                ],
            },
        ],
        Role::Accounting => vec![
            MenuGroup {
                id: "jurnal",
                label: "Jurnal",
                icon: "file-text",
                items: vec![
                    item("/accounting/jurnal/umum", "file-text"),
                    item("/accounting/jurnal/penyesuaian", "file-text"),
                ],
            },
            MenuGroup {
                id: "laporan",
                label: "Laporan",
                icon: "bar-chart",
                items: vec![
                    item("/accounting/buku-besar", "table"),
                    item("/accounting/neraca", "bar-chart"),
                    item("/accounting/laba-rugi", "bar-chart"),
                ],
            },
            MenuGroup {
                id: "master",
                label: "Master",
                icon: "database",
                items: vec![
                    item("/accounting/coa/daftar", "list"),
                    item("/accounting/aset/daftar", "package"),
                    item("/accounting/aset/penyusutan", "percent"),
                ],
            },
            MenuGroup {
                id: "kas",
                label: "Kas",
                icon: "cash",
                items: vec![item("/accounting/voucher/umum", "receipt")],
            },
        ],
        Role::Tax => vec![
            MenuGroup {
                id: "ppn",
                label: "PPN",
                icon: "percent",
                items: vec![
                    item("/tax/ppn/masukan", "percent"),
                    item("/tax/ppn/keluaran", "percent"),
                    item("/tax/faktur/daftar", "file-text"),
                ],
            },
            MenuGroup {
                id: "pph",
                label: "PPh",
                icon: "percent",
                items: vec![
                    item("/tax/pph21/rekap", "percent"),
                    item("/tax/pph23/rekap", "percent"),
                ],
            },
            MenuGroup {
                id: "pelaporan",
                label: "Pelaporan",
                icon: "file-text",
                items: vec![
                    item("/tax/lapor/bulanan", "calendar"),
                    item("/tax/voucher/umum", "receipt"),
                ],
            },
        ],
        Role::Procon => vec![
            MenuGroup {
                id: "proyek",
                label: "Proyek",
                icon: "layers",
                items: vec![
                    item("/procon/proyek/daftar", "layers"),
                    item("/procon/proyek/progress", "activity"),
                ],
            },
            MenuGroup {
                id: "anggaran",
                label: "Anggaran",
                icon: "dollar-sign",
                items: vec![
                    item("/procon/rab/daftar", "dollar-sign"),
                    item("/procon/rab/realisasi", "bar-chart"),
                ],
            },
            MenuGroup {
                id: "pelaksanaan",
                label: "Pelaksanaan",
                icon: "calendar",
                items: vec![
                    item("/procon/timesheet/daftar", "calendar"),
                    item("/procon/subkon/daftar", "contact"),
                    item("/procon/laporan/mingguan", "file-text"),
                ],
            },
        ],
        Role::Marketing => vec![
            MenuGroup {
                id: "penjualan",
                label: "Penjualan",
                icon: "store",
                items: vec![
                    item("/marketing/prospek/daftar", "contact"),
                    item("/marketing/klien/daftar", "building"),
                ],
            },
            MenuGroup {
                id: "penawaran",
                label: "Penawaran",
                icon: "tag",
                items: vec![
                    item("/marketing/penawaran/daftar", "tag"),
                    item("/marketing/penawaran/buat", "file-text"),
                    item("/marketing/tender/daftar", "list"),
                ],
            },
            MenuGroup {
                id: "kontrak",
                label: "Kontrak",
                icon: "file-text",
                items: vec![item("/marketing/kontrak/daftar", "file-text")],
            },
        ],
        Role::Operational => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::FALLBACK_LABEL;
    use crate::resolver::table::RESOLVER;

    #[test]
    fn test_every_menu_path_is_registered() {
        for role in Role::all() {
            for group in menu_groups_for_role(role) {
                for entry in &group.items {
                    assert!(
                        RESOLVER.route(entry.path).is_some(),
                        "menu item '{}' of role '{}' points at an unregistered path",
                        entry.path,
                        role.code()
                    );
                }
            }
        }
    }

    #[test]
    fn test_menu_labels_are_resolved() {
        for role in Role::all() {
            for group in menu_groups_for_role(role) {
                for entry in &group.items {
                    assert_ne!(entry.label, FALLBACK_LABEL, "path '{}'", entry.path);
                }
            }
        }
    }

    #[test]
    fn test_group_ids_unique_per_role() {
        for role in Role::all() {
            let groups = menu_groups_for_role(role);
            let mut ids: Vec<&str> = groups.iter().map(|g| g.id).collect();
            ids.sort_unstable();
            let before = ids.len();
            ids.dedup();
            assert_eq!(ids.len(), before, "role '{}'", role.code());
        }
    }

    #[test]
    fn test_only_operational_sidebar_is_empty() {
        for role in Role::all() {
            let groups = menu_groups_for_role(role);
            if role == Role::Operational {
                assert!(groups.is_empty());
            } else {
                assert!(!groups.is_empty(), "role '{}'", role.code());
            }
        }
    }

    #[test]
    fn test_management_sees_both_approval_screens() {
        let groups = menu_groups_for_role(Role::Management);
        let approval = groups.iter().find(|g| g.id == "approval").unwrap();
        let paths: Vec<&str> = approval.items.iter().map(|i| i.path).collect();
        assert!(paths.contains(&"/management/approve-kontrak"));
        assert!(paths.contains(&"/management/penggajian"));
    }
}
