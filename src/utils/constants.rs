/// Maximum characters of a description shown on a product card.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

pub const NO_DESCRIPTION: &str = "No description available";
pub const NOT_AVAILABLE: &str = "N/A";
pub const UNNAMED_PRODUCT: &str = "Unnamed Product";

// Messages shown to the user

pub const MSG_LOGIN_SUCCESS: &str = "Login successful! Redirecting...";
pub const MSG_LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const MSG_REGISTER_SUCCESS: &str = "Registration successful! Redirecting to login...";
pub const MSG_REGISTER_FAILED: &str = "Registration failed";
pub const MSG_RESET_SUCCESS: &str = "Password updated! Redirecting to login...";
pub const MSG_RESET_FAILED: &str = "Password update failed";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match!";

pub const MSG_SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

pub const MSG_LISTINGS_FETCH_FAILED: &str = "Failed to fetch listings.";
pub const MSG_PRODUCTS_FETCH_FAILED: &str = "Failed to fetch products.";
pub const MSG_PRODUCT_FETCH_FAILED: &str = "Failed to fetch product data.";

pub const MSG_DELETE_PROMPT: &str = "Enter your password to confirm deletion:";
pub const MSG_DELETE_WRONG_PASSWORD: &str = "Invalid password. Deletion failed.";
pub const MSG_DELETE_FAILED: &str = "Error deleting product.";
pub const MSG_DELETE_SUCCESS: &str = "Product deleted successfully.";

pub const MSG_CONFIRM_SELL: &str = "Are you sure you want to post this product?";
pub const MSG_CONFIRM_UPDATE: &str = "Save changes to this product?";
pub const MSG_SELL_SUCCESS: &str = "Product posted successfully!";
pub const MSG_SELL_FAILED: &str = "Failed to add product";
pub const MSG_UPDATE_SUCCESS: &str = "Product updated successfully.";
pub const MSG_UPDATE_FAILED: &str = "Failed to update product.";
pub const MSG_MISSING_PRODUCT_ID: &str = "No product selected for update.";
