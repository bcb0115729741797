/*!
# `IF <condition> THEN <line or statements>`

## Purpose
Execute conditionally.

## Remarks
The condition is an expression, optionally compared to another with
`=`, `<>`, `<`, `<=`, `>`, or `>=`. Strings compare in dictionary
order. A bare numeric expression is true when it is not zero; a true
comparison has the value -1.

When the condition holds and `THEN` is followed by a number, execution
jumps there like a `GOTO`. Anything else after `THEN` executes in
place. When the condition fails, the whole rest of the line is
skipped.

## Example
```text
10 A = 5
20 IF A > 3 THEN PRINT "BIG" : PRINT A
RUN
BIG
5
```

*/
