use chrono::NaiveDate;
use httpmock::prelude::*;
use nestly::{
    BookingRequest, BookingService, DateRange, HttpBookingService, NestlyError, Session,
};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn sample_request() -> BookingRequest {
    BookingRequest {
        room_id: 7,
        user_id: 42,
        check_in_date: date("2024-03-01"),
        check_out_date: date("2024-03-04"),
        paypal_capture_id: "8XJ31902TV".to_string(),
        amount: 360.0,
    }
}

#[tokio::test]
async fn test_list_rooms() {
    let server = MockServer::start();

    let rooms_mock = server.mock(|when, then| {
        when.method(GET).path("/api/rooms");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {
                    "id": 1,
                    "name": "Seaside Loft",
                    "type": "Apartment",
                    "city": "Lisbon",
                    "address": "12 Rua do Mar",
                    "price": 120.0,
                    "featured": true,
                    "description": "Bright loft near the water",
                    "imageUrl": "/images/loft.jpg"
                }
            ]));
    });

    let service = HttpBookingService::new(server.base_url());
    let rooms = service.list_rooms().await.unwrap();

    rooms_mock.assert();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, 1);
    assert_eq!(rooms[0].room_type, "Apartment");
    assert_eq!(rooms[0].image_url, "/images/loft.jpg");
    assert!(rooms[0].featured);
}

#[tokio::test]
async fn test_fetch_room_not_found_uses_server_message() {
    let server = MockServer::start();

    let room_mock = server.mock(|when, then| {
        when.method(GET).path("/api/rooms/99");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "Room not found"}));
    });

    let service = HttpBookingService::new(server.base_url());
    let err = service.fetch_room(99).await.unwrap_err();

    room_mock.assert();
    match err {
        NestlyError::ApiResponseError { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Room not found");
        }
        other => panic!("expected ApiResponseError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_without_json_body_gets_generic_message() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/rooms/1");
        then.status(500);
    });

    let service = HttpBookingService::new(server.base_url());
    let err = service.fetch_room(1).await.unwrap_err();

    match err {
        NestlyError::ApiResponseError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "API request failed (500)");
        }
        other => panic!("expected ApiResponseError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_booked_dates_sends_bearer_token() {
    let server = MockServer::start();

    let dates_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/bookings/room/7/booked-dates")
            .header("authorization", "Bearer secret-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"checkInDate": "2024-01-10", "checkOutDate": "2024-01-15"},
                {"checkInDate": "2024-02-01", "checkOutDate": "2024-02-03"}
            ]));
    });

    let service =
        HttpBookingService::new(server.base_url()).with_session(Session::new("secret-token", 42));
    let booked = service.booked_dates(7).await.unwrap();

    dates_mock.assert();
    assert_eq!(
        booked,
        vec![
            DateRange::new(date("2024-01-10"), date("2024-01-15")),
            DateRange::new(date("2024-02-01"), date("2024-02-03")),
        ]
    );
}

#[tokio::test]
async fn test_create_booking_posts_camel_case_payload() {
    let server = MockServer::start();

    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/bookings/create")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "roomId": 7,
                "userId": 42,
                "checkInDate": "2024-03-01",
                "checkOutDate": "2024-03-04",
                "paypalCaptureId": "8XJ31902TV",
                "amount": 360.0
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": 501,
                "roomId": 7,
                "userId": 42,
                "checkInDate": "2024-03-01",
                "checkOutDate": "2024-03-04",
                "amount": 360.0
            }));
    });

    let service = HttpBookingService::new(server.base_url());
    let result = service.create_booking(&sample_request()).await.unwrap();

    create_mock.assert();
    assert_eq!(result.id, 501);
    assert_eq!(result.room_id, 7);
    assert_eq!(result.check_in_date, date("2024-03-01"));
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_tolerated() {
    let server = MockServer::start();

    let rooms_mock = server.mock(|when, then| {
        when.method(GET).path("/api/rooms");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let service = HttpBookingService::new(format!("{}/", server.base_url()));
    let rooms = service.list_rooms().await.unwrap();

    rooms_mock.assert();
    assert!(rooms.is_empty());
}
