// SPDX-License-Identifier: Apache-2.0

//! User-facing strings of the v1 contacts API. Clients match on these, so
//! they are part of the wire contract.

use bijux_contacts_model::ContactId;

pub const LIST_OK: &str = "Berhasil menampilkan data";
pub const CREATE_OK: &str = "Berhasil menambahkan data";
pub const CONTACT_NOT_FOUND: &str = "Kontak tidak ditemukan";
pub const ROUTE_NOT_FOUND: &str = "Gak ada";

pub const NAME_TAKEN: &str = "Nama sudah Digunakan";
pub const NAME_REQUIRED: &str = "Nama tidak boleh kosong";
pub const EMAIL_INVALID: &str = "Email tidak valid";
pub const PHONE_INVALID: &str = "No HP tidak valid";

pub const LOAD_FAILED: &str = "Gagal memuat data kontak";
pub const SAVE_FAILED: &str = "Gagal menyimpan data kontak";

#[must_use]
pub fn get_ok(id: ContactId) -> String {
    format!("Berhasil menampilkan data dengan id {id}")
}

#[must_use]
pub fn delete_ok(id: ContactId) -> String {
    format!("Kontak dengan id {id} telah dihapus")
}

#[must_use]
pub fn update_ok(id: ContactId) -> String {
    format!("Data kontak {id} berhasil diubah")
}
