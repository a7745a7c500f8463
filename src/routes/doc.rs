use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::{
            AnnouncementRequest, ChartPoint, CollectionInput, CreateAdminUserRequest,
            CustomerDetail, DashboardData, HeroSlideInput, SizeGuideRequest,
            UpdateAdminUserRequest,
        },
        auth::{
            AdminAuthResponse, AuthResponse, ChangePasswordRequest, LoginRequest, SignupRequest,
            UpdateProfileRequest,
        },
        cart::{AddToCartRequest, UpdateCartItemRequest},
        content::{
            ContactRequest, CustomCta, HomeContent, MessageResponse, ProductRef, SizeGuide,
            UnreadCount,
        },
        custom_requests::{
            CreateCustomRequest, RequestChangesRequest, UpdateRequestStatusRequest,
            UploadPreviewRequest,
        },
        orders::{
            AddNoteRequest, CheckoutRequest, CheckoutResponse, ShippingInput,
            UpdateOrderStatusRequest,
        },
        products::{CreateProductRequest, UpdateProductRequest, VariantInput},
    },
    error::{ErrorBody, ErrorCode},
    lifecycle::{
        cart::CartSummary,
        orders::{ReorderOutcome, SkippedLine},
    },
    models::{
        AdminLog, AdminRole, AdminStatus, AdminUser, CartItem, Category, Collection,
        CustomRequest, Customer, CustomerNote, DeliverySettings, FaqItem, HeroSlide, Notification,
        Order, OrderItem, OrderNote, OrderStatusChange, PaymentMethod, Placement, Product,
        ProductImage, ProductStatus, ProductVariant, RelatedType, RequestStatusChange,
        ShippingInfo, Size, StoreSettings, ThemeSettings, User,
    },
    response::{Ack, Meta},
    routes::{
        admin, auth, cart, content, custom_requests, health, notifications, orders, products,
        wishlist,
    },
    status::{OrderStatus, PaymentStatus, RequestStatus},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::signup,
        auth::login,
        auth::me,
        auth::update_profile,
        auth::change_password,
        products::list_products,
        products::best_sellers,
        products::get_product,
        products::related_products,
        products::list_collections,
        content::home,
        content::faq,
        content::size_guide,
        content::contact,
        cart::get_cart,
        cart::add_to_cart,
        cart::update_cart_item,
        cart::remove_cart_item,
        cart::clear_cart,
        orders::checkout,
        orders::list_orders,
        orders::get_order,
        orders::reorder,
        custom_requests::submit_request,
        custom_requests::list_requests,
        custom_requests::get_request,
        custom_requests::approve,
        custom_requests::request_changes,
        wishlist::list_wishlist,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        wishlist::list_recently_viewed,
        wishlist::record_view,
        notifications::list_notifications,
        notifications::unread_count,
        notifications::mark_read,
        notifications::mark_all_read,
        admin::auth::login,
        admin::auth::me,
        admin::dashboard::dashboard,
        admin::products::list_products,
        admin::products::get_product,
        admin::products::create_product,
        admin::products::update_product,
        admin::products::delete_product,
        admin::orders::list_orders,
        admin::orders::get_order,
        admin::orders::update_order_status,
        admin::orders::add_order_note,
        admin::custom_requests::list_requests,
        admin::custom_requests::get_request,
        admin::custom_requests::upload_preview,
        admin::custom_requests::update_request_status,
        admin::collections::list_collections,
        admin::collections::create_collection,
        admin::collections::update_collection,
        admin::collections::delete_collection,
        admin::marketing::update_announcement,
        admin::marketing::list_slides,
        admin::marketing::create_slide,
        admin::marketing::update_slide,
        admin::marketing::delete_slide,
        admin::customers::list_customers,
        admin::customers::get_customer,
        admin::customers::add_customer_note,
        admin::settings::get_store,
        admin::settings::update_store,
        admin::settings::get_delivery,
        admin::settings::update_delivery,
        admin::settings::get_theme,
        admin::settings::update_theme,
        admin::settings::update_size_guide,
        admin::admin_users::list_admin_users,
        admin::admin_users::create_admin_user,
        admin::admin_users::update_admin_user,
        admin::logs::list_logs
    ),
    components(
        schemas(
            User,
            AdminUser,
            AdminRole,
            AdminStatus,
            Product,
            ProductImage,
            ProductVariant,
            ProductStatus,
            Category,
            Size,
            Collection,
            CartItem,
            CartSummary,
            Order,
            OrderItem,
            OrderNote,
            OrderStatus,
            OrderStatusChange,
            PaymentMethod,
            PaymentStatus,
            ShippingInfo,
            CustomRequest,
            RequestStatus,
            RequestStatusChange,
            Placement,
            Notification,
            RelatedType,
            HeroSlide,
            FaqItem,
            StoreSettings,
            DeliverySettings,
            ThemeSettings,
            Customer,
            CustomerNote,
            AdminLog,
            SignupRequest,
            LoginRequest,
            AuthResponse,
            AdminAuthResponse,
            UpdateProfileRequest,
            ChangePasswordRequest,
            AddToCartRequest,
            UpdateCartItemRequest,
            ShippingInput,
            CheckoutRequest,
            CheckoutResponse,
            UpdateOrderStatusRequest,
            AddNoteRequest,
            ReorderOutcome,
            SkippedLine,
            CreateCustomRequest,
            RequestChangesRequest,
            UploadPreviewRequest,
            UpdateRequestStatusRequest,
            CreateProductRequest,
            UpdateProductRequest,
            VariantInput,
            HomeContent,
            CustomCta,
            SizeGuide,
            ContactRequest,
            MessageResponse,
            ProductRef,
            UnreadCount,
            DashboardData,
            ChartPoint,
            CustomerDetail,
            CollectionInput,
            AnnouncementRequest,
            HeroSlideInput,
            CreateAdminUserRequest,
            UpdateAdminUserRequest,
            SizeGuideRequest,
            ErrorBody,
            ErrorCode,
            Ack,
            Meta
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Customer accounts"),
        (name = "Products", description = "Catalog browsing"),
        (name = "Content", description = "Home page, FAQ, size guide and contact form"),
        (name = "Cart", description = "Shopping cart"),
        (name = "Orders", description = "Checkout, order history and reorder"),
        (name = "Custom Requests", description = "Custom t-shirt design requests"),
        (name = "Wishlist", description = "Wishlist and recently viewed products"),
        (name = "Notifications", description = "In-app notifications"),
        (name = "Admin", description = "Back-office endpoints"),
        (name = "Settings", description = "Store configuration, owner only"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
