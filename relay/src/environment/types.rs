use relay_core_contact_impl::ContactServiceImpl;
use relay_extern_impl::telegram::TelegramApiServiceImpl;

// API
pub type RestServer = relay_api_rest::RestServer<Contact>;

// Core
pub type Contact = ContactServiceImpl<TelegramApi>;

// Extern
pub type TelegramApi = TelegramApiServiceImpl;
