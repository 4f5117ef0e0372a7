//! Orders service.

use async_trait::async_trait;
use ferragem::{
    cart::CartLine,
    money::{Cents, line_total, order_total},
    quota::{MonthWindow, QuotaDecision, QuotaPolicy},
    status::OrderStatus,
};
use jiff::Zoned;
use mockall::automock;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::info;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        catalog::{records::ProductUuid, repository::PgCatalogRepository},
        orders::{
            data::{CustomerInfo, NewOrder, NewOrderLine},
            errors::OrdersServiceError,
            records::{OrderLineUuid, OrderRecord, OrderUuid, PlacedOrder},
            repositories::{PgOrderLinesRepository, PgOrdersRepository},
        },
        people::records::PersonUuid,
    },
};

/// Commit-time line snapshot, captured while the product rows are locked by
/// the conditional decrements.
struct LineSnapshot {
    product: ProductUuid,
    name: String,
    unit_price: Cents,
    quantity: u32,
    line_total: Cents,
}

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    quota: QuotaPolicy,
    orders: PgOrdersRepository,
    lines: PgOrderLinesRepository,
    catalog: PgCatalogRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self::with_quota(db, QuotaPolicy::default())
    }

    #[must_use]
    pub fn with_quota(db: Db, quota: QuotaPolicy) -> Self {
        Self {
            db,
            quota,
            orders: PgOrdersRepository::new(),
            lines: PgOrderLinesRepository::new(),
            catalog: PgCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.place_order",
        skip_all,
        fields(
            person = %person,
            line_count = cart_lines.len(),
            order = tracing::field::Empty,
            total_cents = tracing::field::Empty,
        ),
        err
    )]
    async fn place_order(
        &self,
        person: PersonUuid,
        customer: CustomerInfo,
        cart_lines: &[CartLine],
        placed_at: &Zoned,
    ) -> Result<PlacedOrder, OrdersServiceError> {
        validate_lines(cart_lines)?;
        validate_customer(&customer)?;

        let window = MonthWindow::containing(placed_at)?;
        let committed_at = placed_at.timestamp();

        let mut tx = self.db.begin().await?;

        // The count and the refusal happen on the same transaction as the
        // insert, so two checkouts for one person serialise on commit order.
        let placed = self
            .orders
            .count_in_window(&mut tx, person, &window)
            .await?;

        let decision = self.quota.assess(placed);

        if !decision.allowed {
            return Err(OrdersServiceError::QuotaExceeded {
                cap: decision.cap,
                placed,
            });
        }

        let mut snapshots: SmallVec<[LineSnapshot; 8]> = SmallVec::new();

        for line in cart_lines {
            let product = ProductUuid::from_uuid(line.product_uuid());
            let quantity = line.quantity();

            let snapshot = self
                .catalog
                .decrement_stock(&mut tx, product, quantity, committed_at)
                .await?;

            match snapshot {
                Some(snapshot) => snapshots.push(LineSnapshot {
                    product,
                    line_total: line_total(snapshot.price_cents, quantity)?,
                    name: snapshot.name,
                    unit_price: snapshot.price_cents,
                    quantity,
                }),
                // Zero rows updated: either the product is gone or the stock
                // is short. Tell them apart before rolling back.
                None => {
                    let error = match self.catalog.find_product(&mut tx, product).await? {
                        Some(_) => OrdersServiceError::InsufficientStock { product },
                        None => OrdersServiceError::UnknownProduct { product },
                    };

                    return Err(error);
                }
            }
        }

        let total = order_total(snapshots.iter().map(|snapshot| snapshot.line_total))?;

        let order = self
            .orders
            .create_order(
                &mut tx,
                NewOrder {
                    uuid: OrderUuid::new(),
                    person_uuid: person,
                    customer,
                    status: OrderStatus::Pending,
                    total_cents: total,
                    created_at: committed_at,
                },
            )
            .await?;

        let mut lines = Vec::with_capacity(snapshots.len());

        for snapshot in snapshots {
            let line = self
                .lines
                .create_line(
                    &mut tx,
                    NewOrderLine {
                        uuid: OrderLineUuid::new(),
                        order_uuid: order.uuid,
                        product_uuid: snapshot.product,
                        product_name: snapshot.name,
                        unit_price_cents: snapshot.unit_price,
                        quantity: snapshot.quantity,
                        line_total_cents: snapshot.line_total,
                        created_at: committed_at,
                    },
                )
                .await?;

            lines.push(line);
        }

        tx.commit().await?;

        let span = tracing::Span::current();
        span.record("order", tracing::field::display(order.uuid));
        span.record("total_cents", total);

        info!(order = %order.uuid, total_cents = total, "order placed");

        Ok(PlacedOrder { order, lines })
    }

    async fn count_month_orders(
        &self,
        person: PersonUuid,
        now: &Zoned,
    ) -> Result<u32, OrdersServiceError> {
        let window = MonthWindow::containing(now)?;

        let mut tx = self.db.begin().await?;
        let placed = self
            .orders
            .count_in_window(&mut tx, person, &window)
            .await?;
        tx.commit().await?;

        Ok(placed)
    }

    async fn check_quota(
        &self,
        person: PersonUuid,
        now: &Zoned,
    ) -> Result<QuotaDecision, OrdersServiceError> {
        let placed = self.count_month_orders(person, now).await?;

        Ok(self.quota.assess(placed))
    }

    async fn get_order(&self, order: OrderUuid) -> Result<PlacedOrder, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let header = self.orders.get_order(&mut tx, order).await?;
        let lines = self.lines.get_lines(&mut tx, order).await?;

        tx.commit().await?;

        Ok(PlacedOrder {
            order: header,
            lines,
        })
    }

    async fn orders_for_person(
        &self,
        person: PersonUuid,
        now: &Zoned,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let window = MonthWindow::containing(now)?;

        let mut tx = self.db.begin().await?;
        let orders = self
            .orders
            .list_for_person_in_window(&mut tx, person, &window)
            .await?;
        tx.commit().await?;

        Ok(orders)
    }

    #[tracing::instrument(
        name = "orders.set_status",
        skip_all,
        fields(order = %order, to = %status),
        err
    )]
    async fn set_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.orders.get_order(&mut tx, order).await?;

        if !current.status.can_transition_to(status) {
            return Err(OrdersServiceError::InvalidStatusChange {
                from: current.status,
                to: status,
            });
        }

        let updated = self.orders.update_status(&mut tx, order, status).await?;

        tx.commit().await?;

        info!(order = %order, from = %current.status, to = %status, "order status changed");

        Ok(updated)
    }
}

fn validate_lines(cart_lines: &[CartLine]) -> Result<(), OrdersServiceError> {
    if cart_lines.is_empty() {
        return Err(OrdersServiceError::EmptyCart);
    }

    let mut seen: FxHashSet<Uuid> = FxHashSet::default();

    for line in cart_lines {
        if !seen.insert(line.product_uuid()) {
            return Err(OrdersServiceError::DuplicateLine {
                product: ProductUuid::from_uuid(line.product_uuid()),
            });
        }
    }

    Ok(())
}

fn validate_customer(customer: &CustomerInfo) -> Result<(), OrdersServiceError> {
    let required = [&customer.name, &customer.email, &customer.department];

    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(OrdersServiceError::MissingRequiredData);
    }

    Ok(())
}

#[automock]
#[async_trait]
/// Checkout and order inspection operations.
pub trait OrdersService: Send + Sync {
    /// Commits the cart as an order: quota gate, conditional stock
    /// decrements, header and line inserts, all in one transaction.
    ///
    /// Line snapshots use the catalog price at commit time, never the
    /// display price carried on the cart.
    async fn place_order(
        &self,
        person: PersonUuid,
        customer: CustomerInfo,
        cart_lines: &[CartLine],
        placed_at: &Zoned,
    ) -> Result<PlacedOrder, OrdersServiceError>;

    /// Orders the person has committed in the calendar month containing
    /// `now`, evaluated in `now`'s time zone.
    async fn count_month_orders(
        &self,
        person: PersonUuid,
        now: &Zoned,
    ) -> Result<u32, OrdersServiceError>;

    /// Advisory quota check; the authoritative gate re-runs inside
    /// [`OrdersService::place_order`].
    async fn check_quota(
        &self,
        person: PersonUuid,
        now: &Zoned,
    ) -> Result<QuotaDecision, OrdersServiceError>;

    /// Fetches an order header with its lines.
    async fn get_order(&self, order: OrderUuid) -> Result<PlacedOrder, OrdersServiceError>;

    /// The person's orders in the calendar month containing `now`, newest
    /// first.
    async fn orders_for_person(
        &self,
        person: PersonUuid,
        now: &Zoned,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Moves an order along the pending → processing → completed chain, or
    /// cancels a pending order.
    async fn set_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use ferragem::{money::format_amount, quota::DEFAULT_MONTHLY_CAP};
    use testresult::TestResult;

    use crate::{
        domain::catalog::CatalogService,
        test::{
            TestContext,
            helpers::{checkout_form, create_collaborator, create_product, line, zoned},
        },
    };

    use super::*;

    #[tokio::test]
    async fn place_order_decrements_stock_and_snapshots_prices() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1001").await?;
        let hammer = create_product(&ctx, "Claw Hammer", 35_90, 12).await?;
        let screws = create_product(&ctx, "Wood Screws", 8_90, 40).await?;

        let cart = [line(&hammer, 2)?, line(&screws, 3)?];

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let placed = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &cart, &now)
            .await?;

        assert_eq!(placed.order.status, OrderStatus::Pending);
        assert_eq!(placed.order.total_cents, 2 * 35_90 + 3 * 8_90);
        assert_eq!(placed.lines.len(), 2);

        let hammer_line = &placed.lines[0];
        assert_eq!(hammer_line.product_name, "Claw Hammer");
        assert_eq!(hammer_line.unit_price_cents, 35_90);
        assert_eq!(hammer_line.quantity, 2);
        assert_eq!(hammer_line.line_total_cents, 71_80);

        assert_eq!(ctx.catalog.get_product(hammer.uuid).await?.stock, 10);
        assert_eq!(ctx.catalog.get_product(screws.uuid).await?.stock, 37);

        Ok(())
    }

    #[tokio::test]
    async fn place_order_uses_live_price_not_cart_price() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1002").await?;
        let product = create_product(&ctx, "Claw Hammer", 12_50, 5).await?;

        // The shopper added the product before a price change.
        let stale = CartLine::new(product.uuid.into_uuid(), "Claw Hammer", Some(9_99), 2)?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let placed = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &[stale], &now)
            .await?;

        assert_eq!(placed.lines[0].unit_price_cents, 12_50);
        assert_eq!(placed.order.total_cents, 25_00);
        assert_eq!(format_amount(placed.order.total_cents), "25.00");

        Ok(())
    }

    #[tokio::test]
    async fn place_order_rejects_empty_cart() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1003").await?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let result = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &[], &now)
            .await;

        assert!(matches!(result, Err(OrdersServiceError::EmptyCart)));

        Ok(())
    }

    #[tokio::test]
    async fn place_order_rejects_duplicate_product_lines() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1004").await?;
        let product = create_product(&ctx, "Claw Hammer", 35_90, 12).await?;

        let repeated = line(&product, 1)?;
        let cart = [repeated.clone(), repeated];

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let result = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &cart, &now)
            .await;

        assert!(matches!(
            result,
            Err(OrdersServiceError::DuplicateLine { product: p }) if p == product.uuid
        ));

        Ok(())
    }

    #[tokio::test]
    async fn place_order_rejects_blank_customer_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1005").await?;
        let product = create_product(&ctx, "Claw Hammer", 35_90, 12).await?;

        let form = CustomerInfo {
            department: "  ".to_string(),
            ..checkout_form()
        };

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let result = ctx
            .orders
            .place_order(person.uuid, form, &[line(&product, 1)?], &now)
            .await;

        assert!(matches!(
            result,
            Err(OrdersServiceError::MissingRequiredData)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn insufficient_stock_rolls_back_the_whole_attempt() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1006").await?;
        let hammer = create_product(&ctx, "Claw Hammer", 35_90, 5).await?;
        let screws = create_product(&ctx, "Wood Screws", 8_90, 2).await?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let cart = [line(&hammer, 1)?, line(&screws, 9)?];

        let result = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &cart, &now)
            .await;

        assert!(matches!(
            result,
            Err(OrdersServiceError::InsufficientStock { product: p }) if p == screws.uuid
        ));

        // The hammer decrement succeeded inside the transaction and must be
        // rolled back with everything else.
        assert_eq!(ctx.catalog.get_product(hammer.uuid).await?.stock, 5);
        assert_eq!(ctx.catalog.get_product(screws.uuid).await?.stock, 2);
        assert!(ctx.orders.orders_for_person(person.uuid, &now).await?.is_empty());
        assert_eq!(ctx.orders.count_month_orders(person.uuid, &now).await?, 0);

        let stray_lines: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_lines")
            .fetch_one(ctx.db.pool())
            .await?;
        assert_eq!(stray_lines, 0);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_is_reported_as_unavailable() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1007").await?;
        let ghost = CartLine::new(Uuid::now_v7(), "Ghost", None, 1)?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let result = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &[ghost], &now)
            .await;

        assert!(matches!(
            result,
            Err(OrdersServiceError::UnknownProduct { .. })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn deleted_product_is_reported_as_unavailable() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1008").await?;
        let product = create_product(&ctx, "Claw Hammer", 35_90, 12).await?;
        let cart = [line(&product, 1)?];

        ctx.catalog.delete_product(product.uuid).await?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let result = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &cart, &now)
            .await;

        assert!(matches!(
            result,
            Err(OrdersServiceError::UnknownProduct { product: p }) if p == product.uuid
        ));

        Ok(())
    }

    #[tokio::test]
    async fn order_beyond_the_monthly_cap_is_refused() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1009").await?;
        let product = create_product(&ctx, "Wood Screws", 8_90, 50).await?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        for _ in 0..DEFAULT_MONTHLY_CAP {
            ctx.orders
                .place_order(person.uuid, checkout_form(), &[line(&product, 1)?], &now)
                .await?;
        }

        let result = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &[line(&product, 1)?], &now)
            .await;

        assert!(matches!(
            result,
            Err(OrdersServiceError::QuotaExceeded { cap: 4, placed: 4 })
        ));

        // The refused attempt must not have touched stock.
        let expected_stock = 50 - DEFAULT_MONTHLY_CAP;
        assert_eq!(
            ctx.catalog.get_product(product.uuid).await?.stock,
            expected_stock
        );

        Ok(())
    }

    #[tokio::test]
    async fn quota_resets_at_the_month_boundary() -> TestResult {
        let ctx = TestContext::with_quota(QuotaPolicy::new(1)?).await;

        let person = create_collaborator(&ctx, "F1010").await?;
        let product = create_product(&ctx, "Wood Screws", 8_90, 50).await?;

        let late_april = zoned("2025-04-30T23:59:00[America/Sao_Paulo]");
        let early_may = zoned("2025-05-01T00:00:00[America/Sao_Paulo]");

        ctx.orders
            .place_order(person.uuid, checkout_form(), &[line(&product, 1)?], &late_april)
            .await?;

        let refused = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &[line(&product, 1)?], &late_april)
            .await;

        assert!(matches!(
            refused,
            Err(OrdersServiceError::QuotaExceeded { cap: 1, placed: 1 })
        ));

        // The first instant of May opens a fresh window.
        ctx.orders
            .place_order(person.uuid, checkout_form(), &[line(&product, 1)?], &early_may)
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn quota_counts_are_per_person() -> TestResult {
        let ctx = TestContext::new().await;

        let ana = create_collaborator(&ctx, "F2001").await?;
        let bia = create_collaborator(&ctx, "F2002").await?;
        let product = create_product(&ctx, "Wood Screws", 8_90, 50).await?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        for _ in 0..2 {
            ctx.orders
                .place_order(ana.uuid, checkout_form(), &[line(&product, 1)?], &now)
                .await?;
        }

        ctx.orders
            .place_order(bia.uuid, checkout_form(), &[line(&product, 1)?], &now)
            .await?;

        assert_eq!(ctx.orders.count_month_orders(ana.uuid, &now).await?, 2);
        assert_eq!(ctx.orders.count_month_orders(bia.uuid, &now).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn check_quota_reports_remaining_without_blocking() -> TestResult {
        let ctx = TestContext::with_quota(QuotaPolicy::new(2)?).await;

        let person = create_collaborator(&ctx, "F1011").await?;
        let product = create_product(&ctx, "Wood Screws", 8_90, 50).await?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let fresh = ctx.orders.check_quota(person.uuid, &now).await?;
        assert!(fresh.allowed);
        assert_eq!(fresh.remaining, 2);

        ctx.orders
            .place_order(person.uuid, checkout_form(), &[line(&product, 1)?], &now)
            .await?;

        let after_one = ctx.orders.check_quota(person.uuid, &now).await?;
        assert!(after_one.allowed);
        assert_eq!(after_one.remaining, 1);

        ctx.orders
            .place_order(person.uuid, checkout_form(), &[line(&product, 1)?], &now)
            .await?;

        let at_cap = ctx.orders.check_quota(person.uuid, &now).await?;
        assert!(!at_cap.allowed);
        assert_eq!(at_cap.remaining, 0);

        Ok(())
    }

    #[tokio::test]
    async fn order_commit_instant_comes_from_placed_at() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1012").await?;
        let product = create_product(&ctx, "Claw Hammer", 35_90, 12).await?;

        let placed_at = zoned("2025-03-15T10:30:00[America/Sao_Paulo]");

        let placed = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &[line(&product, 1)?], &placed_at)
            .await?;

        assert_eq!(placed.order.created_at, placed_at.timestamp());
        assert_eq!(placed.lines[0].created_at, placed_at.timestamp());

        Ok(())
    }

    #[tokio::test]
    async fn get_order_returns_header_and_lines() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1013").await?;
        let hammer = create_product(&ctx, "Claw Hammer", 35_90, 12).await?;
        let screws = create_product(&ctx, "Wood Screws", 8_90, 40).await?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let placed = ctx
            .orders
            .place_order(
                person.uuid,
                checkout_form(),
                &[line(&hammer, 1)?, line(&screws, 10)?],
                &now,
            )
            .await?;

        let fetched = ctx.orders.get_order(placed.order.uuid).await?;

        assert_eq!(fetched.order, placed.order);
        assert_eq!(fetched.lines, placed.lines);

        let line_sum: Cents = fetched
            .lines
            .iter()
            .map(|order_line| order_line.line_total_cents)
            .sum();

        assert_eq!(fetched.order.total_cents, line_sum);

        Ok(())
    }

    #[tokio::test]
    async fn get_order_unknown_uuid_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.orders.get_order(OrderUuid::new()).await;

        assert!(matches!(result, Err(OrdersServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn status_walks_the_processing_chain() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1014").await?;
        let product = create_product(&ctx, "Claw Hammer", 35_90, 12).await?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let placed = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &[line(&product, 1)?], &now)
            .await?;

        let processing = ctx
            .orders
            .set_status(placed.order.uuid, OrderStatus::Processing)
            .await?;
        assert_eq!(processing.status, OrderStatus::Processing);

        let completed = ctx
            .orders
            .set_status(placed.order.uuid, OrderStatus::Completed)
            .await?;
        assert_eq!(completed.status, OrderStatus::Completed);

        let reopened = ctx
            .orders
            .set_status(placed.order.uuid, OrderStatus::Canceled)
            .await;

        assert!(matches!(
            reopened,
            Err(OrdersServiceError::InvalidStatusChange {
                from: OrderStatus::Completed,
                to: OrderStatus::Canceled,
            })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn status_cannot_skip_processing() -> TestResult {
        let ctx = TestContext::new().await;

        let person = create_collaborator(&ctx, "F1015").await?;
        let product = create_product(&ctx, "Claw Hammer", 35_90, 12).await?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let placed = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &[line(&product, 1)?], &now)
            .await?;

        let result = ctx
            .orders
            .set_status(placed.order.uuid, OrderStatus::Completed)
            .await;

        assert!(matches!(
            result,
            Err(OrdersServiceError::InvalidStatusChange {
                from: OrderStatus::Pending,
                to: OrderStatus::Completed,
            })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn person_resolved_in_the_same_request_can_order() -> TestResult {
        let ctx = TestContext::new().await;

        let product = create_product(&ctx, "Claw Hammer", 35_90, 12).await?;

        // First-time matricula: resolution creates the person and the order
        // follows immediately, as the storefront does in one request.
        let person = create_collaborator(&ctx, "F9999").await?;

        let now = zoned("2025-04-10T09:00:00[America/Sao_Paulo]");

        let placed = ctx
            .orders
            .place_order(person.uuid, checkout_form(), &[line(&product, 1)?], &now)
            .await?;

        assert_eq!(placed.order.person_uuid, person.uuid);

        Ok(())
    }
}
